//! Errors raised while loading or validating CrisisMap configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer failed to parse or did not fit the config shape.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// Rejected by [`crate::CrisisMapConfig::validate`]: a zero timeout, an
    /// empty endpoint with live sources on, or a rating outside 1..=5.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
