//! Swap aggregator abstraction

pub mod types;
pub mod velora_client;

pub use self::velora_client::VeloraClient;

use std::sync::Arc;

use async_trait::async_trait;

use self::types::{BuildTxOptions, BuildTxRequest, PriceRoute, RateRequest, SwapTransaction};
use crate::shared::errors::AggregatorError;

/// Rate discovery and transaction construction of a swap aggregator
#[async_trait]
pub trait AggregatorClient: Send + Sync {
    /// Quote the best route for a token pair
    async fn get_rate(&self, request: &RateRequest) -> Result<PriceRoute, AggregatorError>;

    /// Build a ready-to-submit transaction from a quoted route
    async fn build_tx(
        &self,
        request: &BuildTxRequest,
        options: &BuildTxOptions,
    ) -> Result<SwapTransaction, AggregatorError>;
}

/// Builds an aggregator client once the chain id is known
pub type AggregatorFactory = Arc<dyn Fn(u64) -> Arc<dyn AggregatorClient> + Send + Sync>;
