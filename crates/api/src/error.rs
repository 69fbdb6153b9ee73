//! Error types for the market configuration API client.

use thiserror::Error;

/// Errors that can occur when using the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid chain ID.
    #[error("Invalid chain ID: {0}")]
    InvalidChainId(i64),
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
