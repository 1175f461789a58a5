//! Error handling for the swap adapter

use alloy_primitives::U256;
use thiserror::Error;

/// Errors surfaced by the swap operations
#[derive(Error, Debug)]
pub enum SwapError {
    #[error("swap requires an account that can sign transactions")]
    ReadOnlyAccount,

    #[error("the wallet account is not connected to a provider")]
    NotConnected,

    #[error("swap fee {fee} exceeds the configured maximum of {max_fee}")]
    FeeExceeded { fee: U256, max_fee: U256 },

    #[error(transparent)]
    Aggregator(#[from] AggregatorError),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Aggregator API errors
#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("aggregator request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("aggregator API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid amount in aggregator response: {0}")]
    InvalidAmount(String),
}

/// Wallet account errors, produced by account implementations
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("failed to sign transaction: {0}")]
    Signing(String),

    #[error("failed to broadcast transaction: {0}")]
    Broadcast(String),

    #[error("fee estimation failed: {0}")]
    FeeEstimation(String),

    #[error("wallet account error: {0}")]
    Other(String),
}

/// Chain provider errors
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("invalid chain id in rpc response: {0}")]
    InvalidChainId(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
