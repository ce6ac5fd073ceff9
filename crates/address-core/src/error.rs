//! Error types for the address parser
//!
//! Parsing itself never fails; these cover configuration and the remote
//! endpoint.

use thiserror::Error;

/// Main error type for address operations
#[derive(Error, Debug)]
pub enum AddressError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Remote parser error: {0}")]
    Remote(String),
}

/// Result type for address operations
pub type Result<T> = std::result::Result<T, AddressError>;
