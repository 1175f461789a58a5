//! Wallet account abstraction
//!
//! Accounts come in four capability variants: read-only or signing, plain or
//! smart account. The plain/smart split is a type distinction because the two
//! submission shapes differ (a bare transaction vs. a batched user operation
//! with per-send options); the signing capability is a runtime flag so that
//! read-only and signing accounts share one trait.

use std::sync::Arc;

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;

use crate::aggregator::types::SwapTransaction;
use crate::provider::ProviderSource;
use crate::shared::errors::WalletError;

/// Fee quote for sending a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeEstimate {
    /// Estimated total cost in wei
    pub fee: U256,
}

/// Outcome of a submitted transaction or user operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionResult {
    pub hash: B256,
    pub fee: U256,
}

/// Per-send overrides for smart accounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Token paying the user operation's gas, the account default if unset
    pub paymaster_token: Option<Address>,
}

/// An externally-owned account that signs and submits plain transactions
#[async_trait]
pub trait PlainAccount: Send + Sync {
    /// Whether the account holds signing keys
    fn can_sign(&self) -> bool;

    /// Chain connectivity exposed by the account configuration
    fn provider(&self) -> Option<ProviderSource>;

    /// The account address
    async fn address(&self) -> Result<Address, WalletError>;

    /// Quote the cost of sending a transaction
    async fn quote_send_transaction(
        &self,
        tx: &SwapTransaction,
    ) -> Result<FeeEstimate, WalletError>;

    /// Sign and broadcast a transaction
    async fn send_transaction(&self, tx: &SwapTransaction)
        -> Result<TransactionResult, WalletError>;
}

/// A contract wallet that submits batched transactions as user operations
#[async_trait]
pub trait SmartAccount: Send + Sync {
    /// Whether the account holds signing keys
    fn can_sign(&self) -> bool;

    /// Chain connectivity exposed by the account configuration
    fn provider(&self) -> Option<ProviderSource>;

    /// The account address
    async fn address(&self) -> Result<Address, WalletError>;

    /// Quote the cost of sending a batch as one user operation
    async fn quote_send_transaction(
        &self,
        txs: &[SwapTransaction],
        options: Option<&SendOptions>,
    ) -> Result<FeeEstimate, WalletError>;

    /// Sign and submit a batch as one user operation
    async fn send_transaction(
        &self,
        txs: &[SwapTransaction],
        options: Option<&SendOptions>,
    ) -> Result<TransactionResult, WalletError>;
}

/// Wallet account handle, dispatched by kind
#[derive(Clone)]
pub enum WalletAccount {
    Plain(Arc<dyn PlainAccount>),
    Smart(Arc<dyn SmartAccount>),
}

impl WalletAccount {
    /// Whether the underlying account can sign transactions
    pub fn can_sign(&self) -> bool {
        match self {
            Self::Plain(account) => account.can_sign(),
            Self::Smart(account) => account.can_sign(),
        }
    }

    /// Chain connectivity exposed by the account configuration
    pub fn provider(&self) -> Option<ProviderSource> {
        match self {
            Self::Plain(account) => account.provider(),
            Self::Smart(account) => account.provider(),
        }
    }

    /// The account address
    pub async fn address(&self) -> Result<Address, WalletError> {
        match self {
            Self::Plain(account) => account.address().await,
            Self::Smart(account) => account.address().await,
        }
    }
}
