//! API error types

use dictum_core::LocaleError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Locale table error
    #[error("locale error: {0}")]
    Locale(#[from] LocaleError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
