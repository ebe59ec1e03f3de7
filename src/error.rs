use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("{feature} is currently disabled")]
    FeatureDisabled { feature: String },

    #[error("Transfer of {asset} rejected: {reason}")]
    TransferRejected { asset: String, reason: String },

    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized {},
}

impl ContractError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        ContractError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
