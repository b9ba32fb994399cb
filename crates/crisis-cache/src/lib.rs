//! # crisis-cache
//!
//! Time-boxed local cache for pipeline results.
//!
//! Entries are stored as JSON `{"data": …, "timestamp": <epoch ms>}` under
//! keys prefixed with [`NAMESPACE`]. A read older than the TTL removes the
//! entry and reports a miss. Every store failure is logged and swallowed.

mod error;
mod store;

pub use error::CacheError;
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crisis_config::CacheConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Prefix of every key this cache owns.
pub const NAMESPACE: &str = "crisismap_";
/// Key of the merged, pre-ranking crisis set.
pub const CRISES_KEY: &str = "crises";
/// Key of the charity catalog.
pub const CHARITIES_KEY: &str = "charities";

#[derive(Serialize, Deserialize)]
struct Entry<T> {
    data: T,
    timestamp: i64,
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub struct Cache {
    store: Box<dyn KeyValueStore>,
    ttl_ms: i64,
}

impl Cache {
    pub fn new(store: impl KeyValueStore + 'static, ttl_ms: u64) -> Self {
        Self {
            store: Box::new(store),
            ttl_ms: i64::try_from(ttl_ms).unwrap_or(i64::MAX),
        }
    }

    /// File-backed cache in the configured directory, or an in-memory one
    /// when the platform has no cache directory.
    pub fn from_config(config: &CacheConfig) -> Self {
        match config.resolved_dir() {
            Some(dir) => Self::new(FileStore::new(dir), config.ttl_ms),
            None => {
                tracing::warn!("no cache directory available; caching in memory only");
                Self::new(MemoryStore::new(), config.ttl_ms)
            }
        }
    }

    /// In-memory cache with the given TTL.
    pub fn in_memory(ttl_ms: u64) -> Self {
        Self::new(MemoryStore::new(), ttl_ms)
    }

    pub const fn ttl_ms(&self) -> i64 {
        self.ttl_ms
    }

    /// Store `data` under `key`, stamped with the current time.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, data: &T) {
        self.set_at(key, data, now_ms());
    }

    /// Store `data` under `key`, stamped with `timestamp_ms`.
    pub fn set_at<T: Serialize + ?Sized>(&self, key: &str, data: &T, timestamp_ms: i64) {
        if let Err(e) = self.try_set(key, data, timestamp_ms) {
            tracing::warn!(key, %e, "cache write failed");
        }
    }

    /// Fresh data under `key`, or `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_at(key, now_ms())
    }

    /// Fresh data under `key` as seen at `now_ms`, or `None`.
    ///
    /// Expired and undecodable entries are removed.
    pub fn get_at<T: DeserializeOwned>(&self, key: &str, now_ms: i64) -> Option<T> {
        match self.try_get(key, now_ms) {
            Ok(Lookup::Hit(data)) => Some(data),
            Ok(Lookup::Miss) => None,
            Ok(Lookup::Expired { age_ms }) => {
                tracing::debug!(key, age_ms, "cache entry expired");
                self.discard(key);
                None
            }
            Err(e) => {
                tracing::warn!(key, %e, "cache read failed");
                if matches!(e, CacheError::Serde(_)) {
                    self.discard(key);
                }
                None
            }
        }
    }

    /// Remove every entry under the namespace. Other keys are left alone.
    pub fn clear(&self) {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(%e, "cache clear failed");
                return;
            }
        };
        for key in keys.iter().filter(|k| k.starts_with(NAMESPACE)) {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, %e, "cache entry removal failed");
            }
        }
    }

    fn try_set<T: Serialize + ?Sized>(
        &self,
        key: &str,
        data: &T,
        timestamp_ms: i64,
    ) -> Result<(), CacheError> {
        let full_key = namespaced(key)?;
        let blob = serde_json::to_string(&Entry {
            data,
            timestamp: timestamp_ms,
        })?;
        self.store.write(&full_key, &blob)
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str, now_ms: i64) -> Result<Lookup<T>, CacheError> {
        let full_key = namespaced(key)?;
        let Some(blob) = self.store.read(&full_key)? else {
            return Ok(Lookup::Miss);
        };
        let entry: Entry<serde_json::Value> = serde_json::from_str(&blob)?;
        let age_ms = now_ms.saturating_sub(entry.timestamp);
        if age_ms > self.ttl_ms {
            return Ok(Lookup::Expired { age_ms });
        }
        Ok(Lookup::Hit(serde_json::from_value(entry.data)?))
    }

    fn discard(&self, key: &str) {
        let removed = namespaced(key).and_then(|full_key| self.store.remove(&full_key));
        if let Err(e) = removed {
            tracing::warn!(key, %e, "cache entry removal failed");
        }
    }
}

enum Lookup<T> {
    Hit(T),
    Miss,
    Expired { age_ms: i64 },
}

fn namespaced(key: &str) -> Result<String, CacheError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(format!("{NAMESPACE}{key}"))
    } else {
        Err(CacheError::InvalidKey(key.to_string()))
    }
}
