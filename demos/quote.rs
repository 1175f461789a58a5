//! Quote a USDT -> WETH swap on ethereum mainnet with a watch-only account.
//!
//! Usage: cargo run --example quote -- [rpc-url]

use std::sync::Arc;

use alloy_primitives::{address, Address, U256};
use anyhow::Result;
use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

use velora_swap::{
    FeeEstimate, PlainAccount, ProviderSource, SwapAmount, SwapOptions, SwapTransaction,
    TransactionResult, VeloraSwap, WalletAccount, WalletError,
};

const USDT: Address = address!("dAC17F958D2ee523a2206206994597C13D831ec7");
const WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

/// Watch-only account: address lookup and fee quoting, no keys
struct WatchAccount {
    address: Address,
    rpc_url: String,
}

#[async_trait]
impl PlainAccount for WatchAccount {
    fn can_sign(&self) -> bool {
        false
    }

    fn provider(&self) -> Option<ProviderSource> {
        Some(ProviderSource::Url(self.rpc_url.clone()))
    }

    async fn address(&self) -> Result<Address, WalletError> {
        Ok(self.address)
    }

    async fn quote_send_transaction(
        &self,
        tx: &SwapTransaction,
    ) -> Result<FeeEstimate, WalletError> {
        let gas = tx.gas.unwrap_or(21_000);
        let gas_price = tx.gas_price.unwrap_or_default();

        Ok(FeeEstimate {
            fee: U256::from(gas) * gas_price,
        })
    }

    async fn send_transaction(
        &self,
        _tx: &SwapTransaction,
    ) -> Result<TransactionResult, WalletError> {
        Err(WalletError::Signing("watch-only account".to_string()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let rpc_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://eth.llamarpc.com".to_string());

    let account = WatchAccount {
        address: address!("a460AEbce0d3A4BecAd8ccf9D6D4861296c503Bd"),
        rpc_url,
    };

    let protocol = VeloraSwap::new(WalletAccount::Plain(Arc::new(account)), None);

    let quote = protocol
        .quote_swap(
            &SwapOptions {
                token_in: USDT,
                token_out: WETH,
                amount: SwapAmount::ExactIn(U256::from(100_000_000u64)), // 100 USDT
                to: None,
            },
            None,
        )
        .await?;

    println!("fee:        {} wei", quote.fee);
    println!("token in:   {}", quote.token_in_amount);
    println!("token out:  {}", quote.token_out_amount);

    Ok(())
}
