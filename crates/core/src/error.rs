//! Core error types

use thiserror::Error;

/// Core error type for calldata-bench
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration value could not be parsed or is out of range
    #[error("Invalid configuration '{key}': {reason}")]
    Config { key: String, reason: String },

    /// Configuration file could not be decoded
    #[error("Config file parse error: {0}")]
    ConfigFile(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
