use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 COIN token contract address
    pub coin_cw20: String,
    /// CW721 NFT contract address
    pub nft_cw721: String,
    /// Micro-COIN minted per uaxm (must be >= 1)
    pub ratio: u64,
    /// NFT price in micro-COIN
    pub nft_price: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy COIN by sending native uaxm. Mints amount * ratio micro-COIN
    /// to the sender. Attach uaxm funds to this message.
    BuyTokens {},

    /// Burn COIN (requires prior allowance to this contract) and receive
    /// amount / ratio uaxm back. The division truncates; the remainder is
    /// burned without compensation.
    BurnTokens { amount: Uint128 },

    /// Buy the NFT with the given id for the configured price in COIN
    /// (requires prior allowance). Proceeds are split between the admin
    /// pool and the public pool.
    BuyNft { token_id: String },

    /// Admin: drain the admin pool to the admin as COIN
    Withdraw {},

    /// Admin: accept the pending minter handover on the NFT contract
    /// (step 2 of the cw721 two-step ownership transfer)
    AcceptNftMinter {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get shop configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Get both proceeds pools
    #[returns(PoolsResponse)]
    Pools {},

    /// Get the amount currently claimable by the admin
    #[returns(WithdrawableAmountResponse)]
    WithdrawableAmount {},

    /// Get live shop status (COIN custody, AXM reserve, pools)
    #[returns(StatusResponse)]
    Status {},
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub coin_cw20: Addr,
    pub nft_cw721: Addr,
    pub ratio: u64,
    pub nft_price: Uint128,
}

#[cw_serde]
pub struct PoolsResponse {
    pub admin_pool: Uint128,
    pub public_pool: Uint128,
}

#[cw_serde]
pub struct WithdrawableAmountResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct StatusResponse {
    /// Micro-COIN held by the contract (NFT sale proceeds not yet withdrawn)
    pub coin_held: Uint128,
    /// Native uaxm held by the contract (refund reserve)
    pub axm_reserve: Uint128,
    pub admin_pool: Uint128,
    pub public_pool: Uint128,
}
