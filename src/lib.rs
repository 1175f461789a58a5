//! velora-swap - EVM token swap adapter over the Velora dex aggregator
//!
//! Wraps a wallet account and swaps token pairs through the aggregator's
//! best route: rate lookup, transaction construction, fee-ceiling guard,
//! then submission through the account.

pub mod aggregator;
pub mod protocol;
pub mod provider;
pub mod shared;
pub mod wallet;

// Re-export main types for convenience
pub use aggregator::types::{SwapSide, SwapTransaction};
pub use aggregator::{AggregatorClient, AggregatorFactory, VeloraClient};
pub use protocol::VeloraSwap;
pub use provider::{ChainProvider, JsonRpcChainProvider, ProviderSource};
pub use shared::config::ConfigLoader;
pub use shared::errors::{AggregatorError, ProviderError, SwapError, WalletError};
pub use shared::types::{
    SwapAmount, SwapCallConfig, SwapConfig, SwapOptions, SwapQuote, SwapReceipt,
};
pub use wallet::{
    FeeEstimate, PlainAccount, SendOptions, SmartAccount, TransactionResult, WalletAccount,
};
