//! Error types for the content client.

use thiserror::Error;

/// Errors that can occur when talking to the content service.
#[derive(Error, Debug)]
pub enum ContentClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service is offline or unreachable
    #[error("Content service unreachable: {0}")]
    ServiceUnreachable(String),

    /// Service returned a non-success status
    #[error("Content service error ({status}): {message}")]
    ServiceError { status: u16, message: String },

    /// Failed to parse the service response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid base URL
    #[error("Invalid content service URL: {0}")]
    InvalidUrl(String),

    /// Chapter number outside 1-114, rejected before any request
    #[error("Invalid chapter number: {0} (expected 1-114)")]
    InvalidChapter(u32),
}

impl ContentClientError {
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ContentClientError::ServiceUnreachable(e.to_string())
        } else {
            ContentClientError::Request(e)
        }
    }
}

/// Result type for content client operations.
pub type Result<T> = std::result::Result<T, ContentClientError>;
