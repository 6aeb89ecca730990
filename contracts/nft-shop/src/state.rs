use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// CW20 token contract address (COIN)
    pub coin_cw20: Addr,
    /// CW721 NFT contract address
    pub nft_cw721: Addr,
    /// Micro-COIN minted per uaxm paid. Must be >= 1.
    /// At 1:1 → ratio=1 (1 uaxm = 1 micro-COIN, i.e. 1 AXM = 1 COIN).
    pub ratio: u64,
    /// NFT price in micro-COIN
    pub nft_price: Uint128,
}

/// Accumulated NFT sale proceeds. Invariant (until the admin withdraws):
/// admin_pool + public_pool == sum of all NFT prices collected.
#[cw_serde]
pub struct Pools {
    /// Claimable by the admin via Withdraw
    pub admin_pool: Uint128,
    /// Reserved for holder distribution (disbursed outside this contract)
    pub public_pool: Uint128,
}

impl Default for Pools {
    fn default() -> Self {
        Self {
            admin_pool: Uint128::zero(),
            public_pool: Uint128::zero(),
        }
    }
}

/// Split an NFT sale price between the two pools. The halves always sum back
/// to the full price; the odd unit goes to the public pool, never the admin.
pub fn split_proceeds(price: Uint128) -> (Uint128, Uint128) {
    let admin_share = Uint128::new(price.u128() / 2);
    let public_share = price - admin_share;
    (admin_share, public_share)
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const POOLS: Item<Pools> = Item::new("pools");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_even_price() {
        let (admin, public) = split_proceeds(Uint128::new(2_000));
        assert_eq!(admin, Uint128::new(1_000));
        assert_eq!(public, Uint128::new(1_000));
    }

    #[test]
    fn split_odd_price_favors_public() {
        let (admin, public) = split_proceeds(Uint128::new(2_001));
        assert_eq!(admin, Uint128::new(1_000));
        assert_eq!(public, Uint128::new(1_001));
        assert_eq!(admin + public, Uint128::new(2_001));
    }

    #[test]
    fn split_conserves_for_small_prices() {
        for price in 0u128..=17 {
            let (admin, public) = split_proceeds(Uint128::new(price));
            assert_eq!((admin + public).u128(), price);
            assert!(public >= admin, "public share must never trail at {}", price);
        }
    }

    #[test]
    fn split_zero() {
        let (admin, public) = split_proceeds(Uint128::zero());
        assert_eq!(admin, Uint128::zero());
        assert_eq!(public, Uint128::zero());
    }
}
