//! Serde helpers for amounts the aggregator API carries as decimal strings

use alloy_primitives::U256;
use serde::Deserialize;

/// Decimal amount on the wire, tolerated as either a string or a bare number
#[derive(Deserialize)]
#[serde(untagged)]
enum DecAmount {
    Number(u64),
    String(String),
}

impl DecAmount {
    fn into_u256<E: serde::de::Error>(self) -> Result<U256, E> {
        match self {
            DecAmount::Number(value) => Ok(U256::from(value)),
            DecAmount::String(value) => U256::from_str_radix(&value, 10)
                .map_err(|_| E::custom(format!("invalid decimal amount: {value}"))),
        }
    }
}

/// `U256` carried as a decimal string
pub mod dec_u256 {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DecAmount;

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        DecAmount::deserialize(deserializer)?.into_u256()
    }
}

/// `Option<U256>` carried as a decimal string
pub mod dec_u256_opt {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DecAmount;

    pub fn serialize<S: Serializer>(
        value: &Option<U256>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&value.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        Option::<DecAmount>::deserialize(deserializer)?
            .map(DecAmount::into_u256)
            .transpose()
    }
}

/// `Option<u64>` carried as either a number or a decimal string
pub mod dec_u64_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum U64OrString {
        Number(u64),
        String(String),
    }

    pub fn serialize<S: Serializer>(
        value: &Option<u64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_u64(*value),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        Option::<U64OrString>::deserialize(deserializer)?
            .map(|value| match value {
                U64OrString::Number(value) => Ok(value),
                U64OrString::String(value) => value.parse().map_err(serde::de::Error::custom),
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::dec_u256")]
        amount: U256,
    }

    #[test]
    fn test_decimal_string_roundtrip() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"amount":"100000"}"#).unwrap();
        assert_eq!(wrapper.amount, U256::from(100_000u64));

        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"amount":"100000"}"#);
    }

    #[test]
    fn test_accepts_bare_numbers() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"amount":0}"#).unwrap();
        assert_eq!(wrapper.amount, U256::ZERO);
    }

    #[test]
    fn test_large_amounts_are_exact() {
        // Larger than anything f64 or u128 could hold without loss
        let amount = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let wrapper: Wrapper = serde_json::from_str(&format!(r#"{{"amount":"{amount}"}}"#)).unwrap();
        assert_eq!(wrapper.amount, U256::MAX);
        assert_eq!(wrapper.amount.to_string(), amount);
    }

    #[test]
    fn test_rejects_malformed_amounts() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount":"12.5"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount":"abc"}"#).is_err());
    }
}
