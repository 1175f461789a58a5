//! Common types used across the adapter

use alloy_primitives::{Address, B256, U256};
use serde::Deserialize;

/// Direction-tagged swap amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapAmount {
    /// Exact input amount, sold for the best obtainable output
    ExactIn(U256),
    /// Exact output amount, bought for the smallest sufficient input
    ExactOut(U256),
}

/// Parameters of a swap operation
#[derive(Debug, Clone)]
pub struct SwapOptions {
    /// Token spent by the swap
    pub token_in: Address,
    /// Token received by the swap
    pub token_out: Address,
    pub amount: SwapAmount,
    /// Recipient of the output tokens, the account itself if omitted
    pub to: Option<Address>,
}

/// Adapter configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SwapConfig {
    /// Maximum acceptable transaction cost in wei. Swaps quoting at or above
    /// this ceiling are refused before submission.
    #[serde(default, with = "crate::shared::utils::dec_u256_opt")]
    pub swap_max_fee: Option<U256>,
    /// Aggregator API endpoint override
    pub api_url: Option<String>,
    /// Partner tag attached to aggregator build requests
    pub partner: Option<String>,
}

/// Per-call overrides accepted by the swap operations
///
/// For smart accounts a supplied call config replaces the instance
/// configuration wholesale, including an unset `swap_max_fee`. Plain accounts
/// take their fee ceiling from the instance configuration only.
#[derive(Debug, Clone, Default)]
pub struct SwapCallConfig {
    pub swap_max_fee: Option<U256>,
    /// Token paying the user operation's gas, the account default if unset
    pub paymaster_token: Option<Address>,
}

/// Result of an executed swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapReceipt {
    /// Transaction hash, or user operation hash for smart accounts
    pub hash: B256,
    /// Fee quoted before submission, in wei
    pub fee: U256,
    pub token_in_amount: U256,
    pub token_out_amount: U256,
}

/// Quoted costs of a swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuote {
    /// Estimated fee of sending the swap transaction, in wei
    pub fee: U256,
    pub token_in_amount: U256,
    pub token_out_amount: U256,
}
