use alloy::primitives::B256;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LendingError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("RPC transport error: {0}")]
    TransportError(#[from] alloy::transports::TransportError),

    #[error("Contract call failed: {0}")]
    ContractError(#[from] alloy::contract::Error),

    #[error("Waiting for transaction failed: {0}")]
    PendingTransactionError(#[from] alloy::providers::PendingTransactionError),

    #[error("Transaction {tx_hash} reverted")]
    TransactionReverted { tx_hash: B256 },

    #[error("Unit conversion failed: {0}")]
    UnitsError(#[from] alloy::primitives::utils::UnitsError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown network: {name}")]
    UnknownNetworkError { name: String },

    #[error("Invalid oracle price: {answer}")]
    InvalidPriceError { answer: String },

    #[error("No account available on the node")]
    NoAccountError,
}

pub type Result<T> = std::result::Result<T, LendingError>;
