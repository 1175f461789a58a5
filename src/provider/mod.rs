//! Chain provider abstraction
//!
//! The adapter only needs one thing from the chain: its id, to bind the
//! aggregator client to the right network.

pub mod json_rpc;

pub use self::json_rpc::JsonRpcChainProvider;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::shared::errors::ProviderError;

/// Read access to the identity of the connected network
#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// Resolve the chain id of the connected network
    async fn chain_id(&self) -> Result<u64, ProviderError>;
}

/// How a wallet account exposes its chain connectivity
#[derive(Clone)]
pub enum ProviderSource {
    /// JSON-RPC endpoint url
    Url(String),
    /// Already-constructed provider
    Injected(Arc<dyn ChainProvider>),
}

impl fmt::Debug for ProviderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.debug_tuple("Url").field(url).finish(),
            Self::Injected(_) => f.write_str("Injected(..)"),
        }
    }
}

impl From<&str> for ProviderSource {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for ProviderSource {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<Arc<dyn ChainProvider>> for ProviderSource {
    fn from(provider: Arc<dyn ChainProvider>) -> Self {
        Self::Injected(provider)
    }
}
