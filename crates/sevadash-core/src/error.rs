//! Error types for sevadash.

use thiserror::Error;

/// Result type alias using sevadash's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for sevadash operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Local validation failed before any network call was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP/network request failed, or the backend returned a non-success
    /// status. Carries the backend's message verbatim when available.
    #[error("Request error: {0}")]
    Request(String),

    /// Authentication/authorization failed (expired session, role mismatch).
    /// Fatal for the current page; never retried.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Language preference could not be persisted
    #[error("Preference error: {0}")]
    Preference(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl Error {
    /// Whether this error should tear down the current page (credential
    /// cleared, user sent back to login) rather than being shown as a banner.
    pub fn is_fatal_for_page(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }
}
