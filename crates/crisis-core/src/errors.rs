//! Cross-cutting error types for CrisisMap.
//!
//! Domain-specific errors (`SourceError`, `CacheError`, `ConfigError`) live in
//! their own crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any CrisisMap crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Lookup by identifier returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (range, format, unknown identifier).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
