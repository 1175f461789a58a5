//! Wire types of the aggregator API

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::shared::utils::{dec_u256, dec_u256_opt, dec_u64_opt};

/// Which side of the pair the amount fixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwapSide {
    Sell,
    Buy,
}

impl SwapSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sell => "SELL",
            Self::Buy => "BUY",
        }
    }
}

/// Rate lookup request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    pub src_token: Address,
    pub dest_token: Address,
    /// Exact integer amount as a decimal string
    pub amount: String,
    pub side: SwapSide,
}

/// Price route quoted by the aggregator
///
/// Only the fields this adapter reads are typed. The rest of the route is
/// kept opaque and echoed back verbatim when building the transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRoute {
    pub src_token: Address,
    pub dest_token: Address,
    pub src_amount: String,
    pub dest_amount: String,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Transaction build request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTxRequest {
    pub partner: String,
    pub src_token: Address,
    pub dest_token: Address,
    pub src_amount: String,
    pub dest_amount: String,
    pub user_address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Address>,
    pub price_route: PriceRoute,
}

/// Transaction build options, sent as query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTxOptions {
    pub ignore_checks: bool,
}

/// Ready-to-submit transaction returned by the aggregator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransaction {
    pub from: Address,
    pub to: Address,
    #[serde(with = "dec_u256")]
    pub value: U256,
    pub data: Bytes,
    #[serde(default, with = "dec_u64_opt", skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
    #[serde(default, with = "dec_u256_opt", skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_side_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&SwapSide::Sell).unwrap(), r#""SELL""#);
        assert_eq!(serde_json::to_string(&SwapSide::Buy).unwrap(), r#""BUY""#);
    }

    #[test]
    fn test_price_route_preserves_unknown_fields() {
        let raw = json!({
            "srcToken": "0x9e6b38e072f624fdc4fbaf7bb12a7d9e657435ce",
            "destToken": "0x73091d62f1f11dcb172530126e9630e327770e05",
            "srcAmount": "100",
            "destAmount": "100000",
            "blockNumber": 19000000,
            "gasCost": "152000",
            "bestRoute": [{"percent": 100}]
        });

        let route: PriceRoute = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(route.src_amount, "100");
        assert_eq!(route.dest_amount, "100000");
        assert_eq!(route.rest["blockNumber"], json!(19000000));
        assert_eq!(route.rest["bestRoute"], json!([{"percent": 100}]));

        // The opaque fields must survive the round trip back into a build request
        let reserialized = serde_json::to_value(&route).unwrap();
        assert_eq!(reserialized, raw);
    }

    #[test]
    fn test_swap_transaction_accepts_string_and_number_amounts() {
        let tx: SwapTransaction = serde_json::from_value(json!({
            "from": "0xa460aebce0d3a4becad8ccf9d6d4861296c503bd",
            "to": "0xf90e98f3d8dce44632e5020abf2e122e0f99dfab",
            "value": "0",
            "data": "0xdeadbeef",
            "gas": "210000",
            "gasPrice": "30000000000",
            "chainId": 1
        }))
        .unwrap();

        assert_eq!(tx.value, U256::ZERO);
        assert_eq!(tx.gas, Some(210_000));
        assert_eq!(tx.gas_price, Some(U256::from(30_000_000_000u64)));
        assert_eq!(tx.chain_id, Some(1));

        // Some endpoints return bare numbers instead of decimal strings
        let tx: SwapTransaction = serde_json::from_value(json!({
            "from": "0xa460aebce0d3a4becad8ccf9d6d4861296c503bd",
            "to": "0xf90e98f3d8dce44632e5020abf2e122e0f99dfab",
            "value": 0,
            "data": "0xdeadbeef",
            "gas": 210000
        }))
        .unwrap();

        assert_eq!(tx.value, U256::ZERO);
        assert_eq!(tx.gas, Some(210_000));
        assert_eq!(tx.gas_price, None);
        assert_eq!(tx.chain_id, None);
    }

    #[test]
    fn test_build_request_omits_missing_receiver() {
        let route = PriceRoute {
            src_token: address!("9e6b38E072f624fdC4Fbaf7bB12a7D9e657435ce"),
            dest_token: address!("73091d62F1F11DCb172530126E9630e327770e05"),
            src_amount: "100".to_string(),
            dest_amount: "100000".to_string(),
            rest: serde_json::Map::new(),
        };

        let request = BuildTxRequest {
            partner: "velora-swap".to_string(),
            src_token: route.src_token,
            dest_token: route.dest_token,
            src_amount: route.src_amount.clone(),
            dest_amount: route.dest_amount.clone(),
            user_address: address!("a460AEbce0d3A4BecAd8ccf9D6D4861296c503Bd"),
            receiver: None,
            price_route: route,
        };

        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("receiver").is_none());
        assert!(value.get("srcToken").is_some());
        assert!(value.get("userAddress").is_some());
        assert!(value.get("priceRoute").is_some());
    }

    #[test]
    fn test_rate_request_uses_camel_case_keys() {
        let request = RateRequest {
            src_token: address!("9e6b38E072f624fdC4Fbaf7bB12a7D9e657435ce"),
            dest_token: address!("73091d62F1F11DCb172530126E9630e327770e05"),
            amount: "100".to_string(),
            side: SwapSide::Sell,
        };

        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("srcToken").is_some());
        assert!(value.get("destToken").is_some());
        assert_eq!(value["amount"], json!("100"));
        assert_eq!(value["side"], json!("SELL"));
    }
}
