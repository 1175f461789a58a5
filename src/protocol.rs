//! Swap adapter binding a wallet account to the Velora aggregator
//!
//! Each operation is one linear request chain: rate lookup, transaction
//! build, wallet fee quote, then (for `swap`) the fee-ceiling check and
//! submission. Nothing is retried and no route is cached across calls.

use std::sync::Arc;

use alloy_primitives::U256;
use tokio::sync::OnceCell;
use tracing::info;

use crate::aggregator::types::{
    BuildTxOptions, BuildTxRequest, RateRequest, SwapSide, SwapTransaction,
};
use crate::aggregator::{AggregatorClient, AggregatorFactory, VeloraClient};
use crate::provider::{ChainProvider, JsonRpcChainProvider, ProviderSource};
use crate::shared::errors::{AggregatorError, SwapError};
use crate::shared::types::{
    SwapAmount, SwapCallConfig, SwapConfig, SwapOptions, SwapQuote, SwapReceipt,
};
use crate::wallet::{SendOptions, WalletAccount};

/// Partner tag attached to aggregator build requests
const PARTNER: &str = "velora-swap";

/// Swap adapter over the Velora aggregator
///
/// Wraps a wallet account and swaps token pairs through the aggregator's best
/// route. The chain provider is taken from the account configuration at
/// construction; the aggregator client is created on first use, once the
/// chain id is known, and reused for the adapter's lifetime.
pub struct VeloraSwap {
    account: WalletAccount,
    config: SwapConfig,
    provider: Option<Arc<dyn ChainProvider>>,
    aggregator: OnceCell<Arc<dyn AggregatorClient>>,
    aggregator_factory: AggregatorFactory,
}

/// Swap transaction resolved through the aggregator, with exact amounts
struct ResolvedSwap {
    tx: SwapTransaction,
    token_in_amount: U256,
    token_out_amount: U256,
}

impl VeloraSwap {
    /// Create a new adapter for the given wallet account
    ///
    /// If the account configuration exposes a provider source, the chain
    /// provider is constructed here; without one, every swap and quote
    /// operation fails with [`SwapError::NotConnected`].
    pub fn new(account: WalletAccount, config: Option<SwapConfig>) -> Self {
        let config = config.unwrap_or_default();

        let provider = account.provider().map(|source| match source {
            ProviderSource::Url(url) => {
                Arc::new(JsonRpcChainProvider::new(url)) as Arc<dyn ChainProvider>
            }
            ProviderSource::Injected(provider) => provider,
        });

        let api_url = config.api_url.clone();
        let aggregator_factory: AggregatorFactory = Arc::new(move |chain_id| {
            let client = match &api_url {
                Some(url) => VeloraClient::with_api_url(chain_id, url.clone()),
                None => VeloraClient::new(chain_id),
            };

            Arc::new(client) as Arc<dyn AggregatorClient>
        });

        Self {
            account,
            config,
            provider,
            aggregator: OnceCell::new(),
            aggregator_factory,
        }
    }

    /// Replace the aggregator client constructed on first use
    pub fn with_aggregator_factory(mut self, factory: AggregatorFactory) -> Self {
        self.aggregator_factory = factory;
        self
    }

    /// Swap a pair of tokens
    ///
    /// The necessary amount of input tokens must have been approved to the
    /// aggregator's spender contract beforehand. For smart accounts a
    /// supplied `config` replaces the instance configuration, including its
    /// fee ceiling and paymaster token.
    pub async fn swap(
        &self,
        options: &SwapOptions,
        config: Option<&SwapCallConfig>,
    ) -> Result<SwapReceipt, SwapError> {
        if !self.account.can_sign() {
            return Err(SwapError::ReadOnlyAccount);
        }

        if self.provider.is_none() {
            return Err(SwapError::NotConnected);
        }

        let ResolvedSwap {
            tx,
            token_in_amount,
            token_out_amount,
        } = self.resolve_swap(options).await?;

        match &self.account {
            WalletAccount::Smart(account) => {
                let max_fee = match config {
                    Some(config) => config.swap_max_fee,
                    None => self.config.swap_max_fee,
                };
                let send_options = config.map(|config| SendOptions {
                    paymaster_token: config.paymaster_token,
                });

                let quote = account
                    .quote_send_transaction(std::slice::from_ref(&tx), send_options.as_ref())
                    .await?;
                Self::check_fee_ceiling(quote.fee, max_fee)?;

                let sent = account
                    .send_transaction(std::slice::from_ref(&tx), send_options.as_ref())
                    .await?;

                info!("✅ Swap user operation submitted: {}", sent.hash);

                Ok(SwapReceipt {
                    hash: sent.hash,
                    fee: quote.fee,
                    token_in_amount,
                    token_out_amount,
                })
            }
            WalletAccount::Plain(account) => {
                let quote = account.quote_send_transaction(&tx).await?;
                Self::check_fee_ceiling(quote.fee, self.config.swap_max_fee)?;

                let sent = account.send_transaction(&tx).await?;

                info!("✅ Swap transaction submitted: {}", sent.hash);

                Ok(SwapReceipt {
                    hash: sent.hash,
                    fee: quote.fee,
                    token_in_amount,
                    token_out_amount,
                })
            }
        }
    }

    /// Quote the costs of a swap operation
    ///
    /// Never submits anything and never fails on cost: the fee ceiling only
    /// applies to [`VeloraSwap::swap`].
    pub async fn quote_swap(
        &self,
        options: &SwapOptions,
        config: Option<&SwapCallConfig>,
    ) -> Result<SwapQuote, SwapError> {
        if self.provider.is_none() {
            return Err(SwapError::NotConnected);
        }

        let ResolvedSwap {
            tx,
            token_in_amount,
            token_out_amount,
        } = self.resolve_swap(options).await?;

        let fee = match &self.account {
            WalletAccount::Smart(account) => {
                let send_options = config.map(|config| SendOptions {
                    paymaster_token: config.paymaster_token,
                });

                account
                    .quote_send_transaction(std::slice::from_ref(&tx), send_options.as_ref())
                    .await?
                    .fee
            }
            WalletAccount::Plain(account) => account.quote_send_transaction(&tx).await?.fee,
        };

        Ok(SwapQuote {
            fee,
            token_in_amount,
            token_out_amount,
        })
    }

    /// Get the memoized aggregator client, creating it on first use
    async fn aggregator(&self) -> Result<Arc<dyn AggregatorClient>, SwapError> {
        let provider = self.provider.as_ref().ok_or(SwapError::NotConnected)?;

        let client = self
            .aggregator
            .get_or_try_init(|| async {
                let chain_id = provider.chain_id().await?;

                info!("🔗 Aggregator client bound to chain id {}", chain_id);

                Ok::<_, SwapError>((self.aggregator_factory)(chain_id))
            })
            .await?;

        Ok(Arc::clone(client))
    }

    /// Resolve the swap transaction and exact amounts for the given options
    async fn resolve_swap(&self, options: &SwapOptions) -> Result<ResolvedSwap, SwapError> {
        let aggregator = self.aggregator().await?;

        let (side, amount) = match options.amount {
            SwapAmount::ExactIn(amount) => (SwapSide::Sell, amount),
            SwapAmount::ExactOut(amount) => (SwapSide::Buy, amount),
        };

        let price_route = aggregator
            .get_rate(&RateRequest {
                src_token: options.token_in,
                dest_token: options.token_out,
                amount: amount.to_string(),
                side,
            })
            .await?;

        let address = self.account.address().await?;

        // The aggregator's own pre-flight checks are skipped; the fee ceiling
        // and the wallet's send-time validation stand in for them.
        let tx = aggregator
            .build_tx(
                &BuildTxRequest {
                    partner: self
                        .config
                        .partner
                        .clone()
                        .unwrap_or_else(|| PARTNER.to_string()),
                    src_token: price_route.src_token,
                    dest_token: price_route.dest_token,
                    src_amount: price_route.src_amount.clone(),
                    dest_amount: price_route.dest_amount.clone(),
                    user_address: address,
                    receiver: options.to,
                    price_route: price_route.clone(),
                },
                &BuildTxOptions {
                    ignore_checks: true,
                },
            )
            .await?;

        let token_in_amount = parse_amount(&price_route.src_amount)?;
        let token_out_amount = parse_amount(&price_route.dest_amount)?;

        Ok(ResolvedSwap {
            tx,
            token_in_amount,
            token_out_amount,
        })
    }

    /// Refuse fees at or above the configured ceiling
    fn check_fee_ceiling(fee: U256, max_fee: Option<U256>) -> Result<(), SwapError> {
        match max_fee {
            Some(max_fee) if fee >= max_fee => Err(SwapError::FeeExceeded { fee, max_fee }),
            _ => Ok(()),
        }
    }
}

/// Normalize a decimal amount string from the aggregator into an exact integer
fn parse_amount(amount: &str) -> Result<U256, AggregatorError> {
    U256::from_str_radix(amount, 10).map_err(|_| AggregatorError::InvalidAmount(amount.to_string()))
}
