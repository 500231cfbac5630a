//! Error types for the management client

use thiserror::Error;

/// Errors returned by management-plane requests
#[derive(Error, Debug)]
pub enum MgmtError {
    #[error("Authentication failed (HTTP {code})")]
    AuthenticationFailed { code: u16 },

    #[error("Resource not found")]
    NotFound,

    /// Any other non-success response. `body` carries the server's response
    /// text verbatim.
    #[error("HTTP {code}: {body}")]
    ApiError { code: u16, body: String },

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for management client operations
pub type Result<T> = std::result::Result<T, MgmtError>;
