//! Error types for fraudlens.

use thiserror::Error;

/// Result type alias using `FraudlensError`.
pub type Result<T> = std::result::Result<T, FraudlensError>;

/// Errors that can occur in the monitoring core.
#[derive(Debug, Error)]
pub enum FraudlensError {
    /// Configuration validation failed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input validation failed.
    #[error("Input validation failed: {0}")]
    ValidationError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl FraudlensError {
    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        FraudlensError::ConfigError(msg.into())
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        FraudlensError::ValidationError(msg.into())
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        FraudlensError::InternalError(msg.into())
    }
}
