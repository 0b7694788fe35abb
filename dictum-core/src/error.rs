//! Core error types
//!
//! The editing engine itself never fails; these errors only come from
//! loading locale tables.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a locale table
#[derive(Error, Debug)]
pub enum LocaleError {
    /// The table is not valid TOML or does not match the schema
    #[error("failed to parse locale table: {0}")]
    Parse(#[from] toml::de::Error),

    /// The table parsed but violates a table invariant
    #[error("invalid locale table: {0}")]
    Invalid(String),

    /// The table file could not be read
    #[error("failed to read locale table {}: {source}", .path.display())]
    Io {
        /// Path of the table file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result type for locale table operations
pub type Result<T> = std::result::Result<T, LocaleError>;
