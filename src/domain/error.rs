use std::io;

use thiserror::Error;

/// Library-wide error type for showroom operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A backend request failed (transport error, non-success status, or undecodable body).
    #[error("Request '{operation}' failed: {reason}")]
    RequestFailed { operation: String, reason: String },

    /// Sort key is not one of the supported values.
    #[error("Invalid sort key '{0}': must be one of none, engine, type, price")]
    InvalidSortKey(String),

    /// Price range bounds are unusable.
    #[error(
        "Invalid price range [{min}, {max}]: bounds must be finite, non-negative, and min <= max"
    )]
    InvalidPriceRange { min: f64, max: f64 },

    /// Car identifier is empty or malformed.
    #[error("Invalid car identifier '{0}'")]
    InvalidCarId(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn request_failed(operation: impl Into<String>, reason: impl ToString) -> Self {
        AppError::RequestFailed { operation: operation.into(), reason: reason.to_string() }
    }
}
