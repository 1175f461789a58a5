//! HTTP client for the Velora aggregator API

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::types::{BuildTxOptions, BuildTxRequest, PriceRoute, RateRequest, SwapTransaction};
use super::AggregatorClient;
use crate::shared::errors::AggregatorError;

/// Default aggregator API endpoint
pub const DEFAULT_API_URL: &str = "https://api.paraswap.io";

/// Price response wrapper
#[derive(Debug, Deserialize)]
struct RateResponse {
    #[serde(rename = "priceRoute")]
    price_route: PriceRoute,
}

/// Error body returned by the aggregator API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
}

/// Velora aggregator API client, bound to one chain
pub struct VeloraClient {
    http_client: Client,
    base_url: String,
    chain_id: u64,
}

impl VeloraClient {
    pub fn new(chain_id: u64) -> Self {
        Self::with_api_url(chain_id, DEFAULT_API_URL)
    }

    pub fn with_api_url(chain_id: u64, api_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: api_url.into(),
            chain_id,
        }
    }

    /// Turn a non-success response into an API error with the server's message
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AggregatorError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error.unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };

        Err(AggregatorError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AggregatorClient for VeloraClient {
    async fn get_rate(&self, request: &RateRequest) -> Result<PriceRoute, AggregatorError> {
        let url = format!("{}/prices", self.base_url);

        info!(
            "🔍 Fetching {} rate for {} -> {} (amount: {})",
            request.side.as_str(),
            request.src_token,
            request.dest_token,
            request.amount
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("srcToken", request.src_token.to_string()),
                ("destToken", request.dest_token.to_string()),
                ("amount", request.amount.clone()),
                ("side", request.side.as_str().to_string()),
                ("network", self.chain_id.to_string()),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let rate: RateResponse = response.json().await?;

        debug!(
            "✅ Got price route: {} -> {}",
            rate.price_route.src_amount, rate.price_route.dest_amount
        );

        Ok(rate.price_route)
    }

    async fn build_tx(
        &self,
        request: &BuildTxRequest,
        options: &BuildTxOptions,
    ) -> Result<SwapTransaction, AggregatorError> {
        let url = format!("{}/transactions/{}", self.base_url, self.chain_id);

        info!("🔨 Building swap transaction for {}", request.user_address);

        let response = self
            .http_client
            .post(&url)
            .query(&[("ignoreChecks", options.ignore_checks)])
            .json(request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let tx: SwapTransaction = response.json().await?;

        debug!("✅ Built swap transaction to {}", tx.to);

        Ok(tx)
    }
}
