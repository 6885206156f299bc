//! Centralized error types for FBA.

use thiserror::Error;

/// Main error type for FBA operations.
#[derive(Error, Debug)]
pub enum FbaError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for FBA operations.
pub type FbaResult<T> = Result<T, FbaError>;

impl FbaError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error was caused by bad caller input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}
