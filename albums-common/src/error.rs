//! Common error types for the album service

use thiserror::Error;

/// Common result type for album service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the album crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error (seed files)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML config file could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested album not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid album or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
