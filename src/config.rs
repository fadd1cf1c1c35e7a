//! API configuration

use rusty_money::iso::{self, Currency};
use thiserror::Error;

use crate::{endpoints::DEFAULT_API_BASE, pricing::DEFAULT_CURRENCY};

/// Errors raised while building an [`ApiConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The currency code is not an ISO 4217 code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The API base URL is blank.
    #[error("API base URL cannot be empty")]
    EmptyBaseUrl,
}

/// Where the catalog lives and how its prices are shown.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API base URL, without a trailing endpoint path.
    pub base_url: String,

    /// Currency used when formatting prices.
    pub currency: &'static Currency,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            currency: DEFAULT_CURRENCY,
        }
    }
}

impl ApiConfig {
    /// Configuration for `base_url` with the default currency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] when `base_url` is blank.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();

        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        Ok(Self {
            base_url,
            currency: DEFAULT_CURRENCY,
        })
    }

    /// Replace the display currency by ISO code, e.g. `"BDT"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCurrency`] when `code` is not recognised.
    pub fn with_currency_code(mut self, code: &str) -> Result<Self, ConfigError> {
        self.currency = iso::find(&code.trim().to_ascii_uppercase())
            .ok_or_else(|| ConfigError::UnknownCurrency(code.to_string()))?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();

        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.currency.iso_alpha_code, "BDT");
    }

    #[test]
    fn test_currency_code_lookup() -> TestResult {
        let config = ApiConfig::new("http://localhost:3000")?.with_currency_code("gbp")?;

        assert_eq!(config.currency.iso_alpha_code, "GBP");

        Ok(())
    }

    #[test]
    fn test_unknown_currency() -> TestResult {
        let result = ApiConfig::new("http://localhost:3000")?.with_currency_code("XYZ1");

        assert!(matches!(result, Err(ConfigError::UnknownCurrency(code)) if code == "XYZ1"));

        Ok(())
    }

    #[test]
    fn test_empty_base_url() {
        assert!(matches!(
            ApiConfig::new("  "),
            Err(ConfigError::EmptyBaseUrl)
        ));
    }
}
