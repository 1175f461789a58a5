//! JSON-RPC chain provider for EVM endpoints

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::ChainProvider;
use crate::shared::errors::ProviderError;

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Chain provider backed by an EVM JSON-RPC endpoint
pub struct JsonRpcChainProvider {
    http_client: Client,
    url: String,
}

impl JsonRpcChainProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ChainProvider for JsonRpcChainProvider {
    async fn chain_id(&self) -> Result<u64, ProviderError> {
        debug!("🔍 Resolving chain id via {}", self.url);

        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_chainId",
            "params": []
        });

        let response: RpcResponse = self
            .http_client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(ProviderError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        let quantity = response
            .result
            .ok_or_else(|| ProviderError::InvalidChainId("missing result".to_string()))?;

        parse_chain_id(&quantity)
    }
}

/// Parse an `eth_chainId` hex quantity into a chain id
fn parse_chain_id(quantity: &str) -> Result<u64, ProviderError> {
    let digits = quantity.strip_prefix("0x").unwrap_or(quantity);

    u64::from_str_radix(digits, 16)
        .map_err(|_| ProviderError::InvalidChainId(quantity.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0x1").unwrap(), 1);
        assert_eq!(parse_chain_id("0x89").unwrap(), 137);
        assert_eq!(parse_chain_id("0xa4b1").unwrap(), 42161);
    }

    #[test]
    fn test_parse_chain_id_rejects_garbage() {
        assert!(parse_chain_id("").is_err());
        assert!(parse_chain_id("0x").is_err());
        assert!(parse_chain_id("mainnet").is_err());
    }

    #[test]
    fn test_deserialize_result_response() {
        let response: RpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":"0x1"}"#).unwrap();

        assert_eq!(response.result.as_deref(), Some("0x1"));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_deserialize_error_response() {
        let response: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#,
        )
        .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "method not found");
    }
}
