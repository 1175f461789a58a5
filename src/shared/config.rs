//! Adapter configuration loading

use std::fs;
use std::path::Path;

use crate::shared::errors::ConfigError;
use crate::shared::types::SwapConfig;

/// Configuration file loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the adapter configuration from a toml file
    pub fn load_config(path: impl AsRef<Path>) -> Result<SwapConfig, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    use crate::shared::types::SwapConfig;

    #[test]
    fn test_parse_full_config() {
        let config: SwapConfig = toml::from_str(
            r#"
            swap_max_fee = "250000000000000"
            api_url = "https://aggregator.example.com"
            partner = "my-wallet"
            "#,
        )
        .unwrap();

        assert_eq!(config.swap_max_fee, Some(U256::from(250_000_000_000_000u64)));
        assert_eq!(config.api_url.as_deref(), Some("https://aggregator.example.com"));
        assert_eq!(config.partner.as_deref(), Some("my-wallet"));
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: SwapConfig = toml::from_str("").unwrap();

        assert_eq!(config.swap_max_fee, None);
        assert_eq!(config.api_url, None);
        assert_eq!(config.partner, None);
    }
}
