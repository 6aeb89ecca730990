use cosmwasm_std::{
    entry_point, to_json_binary, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Empty, Env,
    MessageInfo, Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;
use cw721_base::{ExecuteMsg as Cw721ExecuteMsg, Extension};
use cw_ownable::Action;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, PoolsResponse, QueryMsg, StatusResponse,
    WithdrawableAmountResponse,
};
use crate::state::{split_proceeds, Config, Pools, CONFIG, POOLS};

const CONTRACT_NAME: &str = "crates.io:nft-shop";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const NATIVE_DENOM: &str = "uaxm";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.ratio == 0 {
        return Err(ContractError::InvalidRatio);
    }

    let config = Config {
        admin: info.sender,
        coin_cw20: deps.api.addr_validate(&msg.coin_cw20)?,
        nft_cw721: deps.api.addr_validate(&msg.nft_cw721)?,
        ratio: msg.ratio,
        nft_price: msg.nft_price,
    };

    CONFIG.save(deps.storage, &config)?;
    POOLS.save(deps.storage, &Pools::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin.to_string())
        .add_attribute("coin_cw20", config.coin_cw20.to_string())
        .add_attribute("nft_cw721", config.nft_cw721.to_string())
        .add_attribute("ratio", config.ratio.to_string())
        .add_attribute("nft_price", config.nft_price.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::BuyTokens {} => execute_buy_tokens(deps, env, info),
        ExecuteMsg::BurnTokens { amount } => execute_burn_tokens(deps, env, info, amount),
        ExecuteMsg::BuyNft { token_id } => execute_buy_nft(deps, env, info, token_id),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, info),
        ExecuteMsg::AcceptNftMinter {} => execute_accept_nft_minter(deps, info),
    }
}

/// User sends native uaxm → COIN is minted to them at the configured ratio.
/// The uaxm stays in the contract as the refund reserve for burns.
fn execute_buy_tokens(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Validate funds
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() > 1 {
        return Err(ContractError::MultipleDenoms);
    }
    let sent = &info.funds[0];
    if sent.denom != NATIVE_DENOM {
        return Err(ContractError::InvalidDenom {
            denom: sent.denom.clone(),
        });
    }
    if sent.amount.is_zero() {
        return Err(ContractError::NoFundsSent);
    }

    let minted = sent.amount.checked_mul(Uint128::from(config.ratio))?;

    // Mint COIN to the buyer — requires this contract to be the CW20 minter
    let mint_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.coin_cw20.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: info.sender.to_string(),
            amount: minted,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(mint_msg)
        .add_attribute("action", "buy_tokens")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("axm_paid", sent.amount.to_string())
        .add_attribute("coin_minted", minted.to_string()))
}

/// Burn COIN from the caller (consuming their allowance) and refund
/// amount / ratio uaxm. The division truncates; the remainder is burned
/// with no refund.
fn execute_burn_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let refund = amount.checked_div(Uint128::from(config.ratio))?;

    // The refund must be covered by uaxm accumulated through buy_tokens.
    // Falling short here means a supply invariant was broken upstream.
    let reserve = deps
        .querier
        .query_balance(env.contract.address.to_string(), NATIVE_DENOM)?;
    if reserve.amount < refund {
        return Err(ContractError::InsufficientReserve {
            available: reserve.amount.to_string(),
            needed: refund.to_string(),
        });
    }

    let burn_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.coin_cw20.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    let mut res = Response::new().add_message(burn_msg);
    if !refund.is_zero() {
        res = res.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom: NATIVE_DENOM.to_string(),
                amount: refund,
            }],
        }));
    }

    Ok(res
        .add_attribute("action", "burn_tokens")
        .add_attribute("burner", info.sender.to_string())
        .add_attribute("coin_burned", amount.to_string())
        .add_attribute("axm_refunded", refund.to_string()))
}

/// Pull the NFT price in COIN from the caller, mint them the NFT, and split
/// the proceeds between the admin and public pools. Everything happens in one
/// transaction: if the token pull or the mint fails (e.g. the id is already
/// claimed), the pool credit rolls back with it.
fn execute_buy_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let price = config.nft_price;

    let mut msgs: Vec<CosmosMsg> = Vec::with_capacity(2);

    // Pull the price into contract custody (held, not burned)
    if !price.is_zero() {
        msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.coin_cw20.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: info.sender.to_string(),
                recipient: env.contract.address.to_string(),
                amount: price,
            })?,
            funds: vec![],
        }));
    }

    // Mint the NFT to the buyer — the registry rejects an already-claimed id
    msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.nft_cw721.to_string(),
        msg: to_json_binary(&Cw721ExecuteMsg::<Extension, Empty>::Mint {
            token_id: token_id.clone(),
            owner: info.sender.to_string(),
            token_uri: None,
            extension: None,
        })?,
        funds: vec![],
    }));

    let mut pools = POOLS.load(deps.storage)?;
    let (admin_share, public_share) = split_proceeds(price);
    pools.admin_pool += admin_share;
    pools.public_pool += public_share;
    POOLS.save(deps.storage, &pools)?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "buy_nft")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("token_id", token_id)
        .add_attribute("price", price.to_string())
        .add_attribute("admin_share", admin_share.to_string())
        .add_attribute("public_share", public_share.to_string()))
}

/// Admin: drain the admin pool, paid out as COIN from contract custody.
fn execute_withdraw(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let mut pools = POOLS.load(deps.storage)?;
    let amount = pools.admin_pool;
    if amount.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }

    pools.admin_pool = Uint128::zero();
    POOLS.save(deps.storage, &pools)?;

    let transfer_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.coin_cw20.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: config.admin.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer_msg)
        .add_attribute("action", "withdraw")
        .add_attribute("admin", config.admin.to_string())
        .add_attribute("amount", amount.to_string()))
}

/// Admin: complete the two-step minter handover on the CW721 contract.
/// The NFT contract owner must first have proposed this contract as the
/// new owner via TransferOwnership.
fn execute_accept_nft_minter(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let accept_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.nft_cw721.to_string(),
        msg: to_json_binary(&Cw721ExecuteMsg::<Extension, Empty>::UpdateOwnership(
            Action::AcceptOwnership,
        ))?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(accept_msg)
        .add_attribute("action", "accept_nft_minter")
        .add_attribute("nft_cw721", config.nft_cw721.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Pools {} => to_json_binary(&query_pools(deps)?),
        QueryMsg::WithdrawableAmount {} => to_json_binary(&query_withdrawable_amount(deps)?),
        QueryMsg::Status {} => to_json_binary(&query_status(deps, env)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        coin_cw20: config.coin_cw20,
        nft_cw721: config.nft_cw721,
        ratio: config.ratio,
        nft_price: config.nft_price,
    })
}

fn query_pools(deps: Deps) -> StdResult<PoolsResponse> {
    let pools = POOLS.load(deps.storage)?;
    Ok(PoolsResponse {
        admin_pool: pools.admin_pool,
        public_pool: pools.public_pool,
    })
}

fn query_withdrawable_amount(deps: Deps) -> StdResult<WithdrawableAmountResponse> {
    let pools = POOLS.load(deps.storage)?;
    Ok(WithdrawableAmountResponse {
        amount: pools.admin_pool,
    })
}

fn query_status(deps: Deps, env: Env) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let pools = POOLS.load(deps.storage)?;

    // Query COIN custody balance
    let coin_balance: cw20::BalanceResponse = deps.querier.query_wasm_smart(
        config.coin_cw20.to_string(),
        &cw20::Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;

    // Query native AXM reserve
    let axm_balance = deps
        .querier
        .query_balance(env.contract.address.to_string(), NATIVE_DENOM)?;

    Ok(StatusResponse {
        coin_held: coin_balance.balance,
        axm_reserve: axm_balance.amount,
        admin_pool: pools.admin_pool,
        public_pool: pools.public_pool,
    })
}
