//! Source error types.

use thiserror::Error;

/// Errors raised while fetching or decoding an upstream source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the upstream.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a payload.
    #[error("parse error: {0}")]
    Parse(String),

    /// The upstream returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// No request strategy was configured for the source.
    #[error("no transport configured for {0}")]
    NoTransport(&'static str),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
