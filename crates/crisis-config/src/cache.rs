//! Local cache configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Five minutes.
const fn default_ttl_ms() -> u64 {
    5 * 60 * 1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Time-to-live of a cache entry, in milliseconds.
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,

    /// Directory holding cache files. Defaults to `<user cache dir>/crisismap`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
            dir: None,
        }
    }
}

impl CacheConfig {
    /// Resolved cache directory, or `None` when the platform has no cache dir.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| dirs::cache_dir().map(|p| p.join("crisismap")))
    }
}
