//! Showroom configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::catalog::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, PriceRange};

/// Configuration loaded from `showroom.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowroomConfig {
    /// Backend API configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Initial filter configuration.
    #[serde(default)]
    pub filter: FilterDefaults,
}

impl ShowroomConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        self.filter.validate()?;
        Ok(())
    }
}

/// Backend API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL the `/cars` resource hangs off.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds. Absent means requests never time out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: None }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "base_url must use http or https, got '{}'",
                self.base_url.scheme()
            )));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "base_url '{}' cannot be used as a base",
                self.base_url
            )));
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:8080").expect("Default base URL must be valid")
}

/// Price bounds the view starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterDefaults {
    #[serde(default = "default_min_price")]
    pub min_price: f64,
    #[serde(default = "default_max_price")]
    pub max_price: f64,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self { min_price: default_min_price(), max_price: default_max_price() }
    }
}

impl FilterDefaults {
    pub fn validate(&self) -> Result<(), AppError> {
        self.price_range().map(|_| ()).map_err(|e| AppError::InvalidConfig(e.to_string()))
    }

    fn price_range(&self) -> Result<PriceRange, AppError> {
        PriceRange::new(self.min_price, self.max_price)
    }
}

fn default_min_price() -> f64 {
    DEFAULT_MIN_PRICE
}

fn default_max_price() -> f64 {
    DEFAULT_MAX_PRICE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showroom_config_defaults() {
        let config = ShowroomConfig::default();
        assert_eq!(config.api.base_url.as_str(), "http://localhost:8080/");
        assert!(config.api.timeout_secs.is_none());
        assert_eq!(config.filter.min_price, 0.0);
        assert_eq!(config.filter.max_price, 100000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = ShowroomConfig::default();
        config.api.timeout_secs = Some(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(msg) if msg.contains("timeout_secs")));
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let config =
            ApiConfig { base_url: Url::parse("ftp://cars.example").unwrap(), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_price_defaults() {
        let config = FilterDefaults { min_price: 5000.0, max_price: 10.0 };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn filter_defaults_build_price_range() {
        let range = FilterDefaults { min_price: 1000.0, max_price: 2000.0 }.price_range().unwrap();
        assert_eq!(range.min(), 1000.0);
        assert_eq!(range.max(), 2000.0);
    }
}
