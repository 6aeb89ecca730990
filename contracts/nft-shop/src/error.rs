use cosmwasm_std::{DivideByZeroError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid ratio: must be >= 1")]
    InvalidRatio,

    #[error("No AXM funds sent. Send native uaxm to buy COIN")]
    NoFundsSent,

    #[error("Send exactly one coin denomination (uaxm)")]
    MultipleDenoms,

    #[error("Invalid denom: expected uaxm, got {denom}")]
    InvalidDenom { denom: String },

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Insufficient AXM reserve for refund. Available: {available}, needed: {needed}")]
    InsufficientReserve { available: String, needed: String },

    #[error("Nothing to withdraw: admin pool is empty")]
    NothingToWithdraw,
}
