//! Cache error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem failure (missing directory, permissions, full disk).
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Entry could not be encoded or decoded.
    #[error("cache entry is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),

    /// Key contains characters that cannot name a store entry.
    #[error("invalid cache key '{0}'")]
    InvalidKey(String),

    /// Store backend is unavailable (poisoned lock, closed handle).
    #[error("cache store unavailable: {0}")]
    Unavailable(String),
}
