//! Cache behaviour over real stores: TTL expiry, purge on read, namespace
//! clearing, and failure swallowing.

use crisis_cache::{
    CHARITIES_KEY, CRISES_KEY, Cache, CacheError, FileStore, KeyValueStore, MemoryStore,
};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

const TTL: u64 = 5 * 60 * 1000;
const T0: i64 = 1_700_000_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Snapshot {
    ids: Vec<String>,
    total: u64,
}

fn snapshot() -> Snapshot {
    Snapshot {
        ids: vec!["gdacs-1".into(), "crisis-003".into()],
        total: 2,
    }
}

#[test]
fn get_within_ttl_returns_identical_data() {
    let cache = Cache::in_memory(TTL);
    cache.set_at(CRISES_KEY, &snapshot(), T0);
    assert_eq!(cache.get_at::<Snapshot>(CRISES_KEY, T0), Some(snapshot()));
    assert_eq!(
        cache.get_at::<Snapshot>(CRISES_KEY, T0 + 299_999),
        Some(snapshot())
    );
}

#[test]
fn age_equal_to_ttl_is_still_fresh() {
    let cache = Cache::in_memory(TTL);
    cache.set_at(CRISES_KEY, &snapshot(), T0);
    assert!(cache.get_at::<Snapshot>(CRISES_KEY, T0 + 300_000).is_some());
}

#[test]
fn expired_entry_is_absent_and_purged() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let cache = Cache::new(store.clone(), TTL);

    cache.set_at(CRISES_KEY, &snapshot(), T0);
    assert_eq!(store.keys().unwrap(), vec!["crisismap_crises"]);

    assert_eq!(cache.get_at::<Snapshot>(CRISES_KEY, T0 + 300_001), None);
    assert!(store.keys().unwrap().is_empty(), "expired entry must be removed");
    // A later read at an earlier clock still misses: the entry is gone.
    assert_eq!(cache.get_at::<Snapshot>(CRISES_KEY, T0), None);
}

#[test]
fn entries_are_data_timestamp_json() {
    let dir = tempfile::tempdir().unwrap();
    let cache = Cache::new(FileStore::new(dir.path()), TTL);
    cache.set_at(CHARITIES_KEY, &vec![1, 2, 3], T0);

    let raw = std::fs::read_to_string(dir.path().join("crisismap_charities.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
    assert_eq!(value["timestamp"], T0);
}

#[test]
fn clear_removes_only_namespaced_entries() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.write("other_app_state", "{}").unwrap();
    let cache = Cache::new(store.clone(), TTL);
    cache.set(CRISES_KEY, &snapshot());
    cache.set(CHARITIES_KEY, &snapshot());

    cache.clear();

    assert_eq!(store.keys().unwrap(), vec!["other_app_state"]);
    assert_eq!(cache.get::<Snapshot>(CRISES_KEY), None);
}

#[test]
fn corrupt_blob_is_a_miss_and_removed() {
    let store = MemoryStore::new();
    store.write("crisismap_crises", "{not json").unwrap();
    let cache = Cache::new(store, TTL);
    assert_eq!(cache.get::<Snapshot>(CRISES_KEY), None);
    // Writing after the purge works normally.
    cache.set(CRISES_KEY, &snapshot());
    assert_eq!(cache.get::<Snapshot>(CRISES_KEY), Some(snapshot()));
}

#[test]
fn wrong_shape_is_a_miss() {
    let cache = Cache::in_memory(TTL);
    cache.set_at(CRISES_KEY, &"just a string", T0);
    assert_eq!(cache.get_at::<Snapshot>(CRISES_KEY, T0), None);
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn read(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(std::io::Error::other("disk unplugged").into())
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
        Err(std::io::Error::other("disk full").into())
    }

    fn remove(&self, _key: &str) -> Result<(), CacheError> {
        Err(std::io::Error::other("read-only").into())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Err(std::io::Error::other("disk unplugged").into())
    }
}

#[test]
fn store_failures_are_swallowed() {
    let cache = Cache::new(BrokenStore, TTL);
    cache.set(CRISES_KEY, &snapshot());
    assert_eq!(cache.get::<Snapshot>(CRISES_KEY), None);
    cache.clear();
}
