//! Mirroring the event store into a single string-keyed slot.
//!
//! Loading and persisting never fail from the caller's point of view: a
//! missing or corrupt slot loads as an empty store, and a rejected write is
//! logged while the in-memory store stays authoritative.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::constants::EVENTS_KEY;
use crate::error::{DeskcalError, DeskcalResult};
use crate::store::EventStore;

/// A string-keyed storage backend holding string values.
pub trait Storage {
    /// `Ok(None)` when the slot has never been written.
    fn get(&self, key: &str) -> DeskcalResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> DeskcalResult<()>;
}

/// Slots stored as `<dir>/<key>.json` files.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> DeskcalResult<Option<String>> {
        let path = self.slot_path(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> DeskcalResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}

/// In-process slots with an optional total size limit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes that would push the total stored bytes past `quota` are rejected.
    pub fn with_quota(quota: usize) -> Self {
        MemoryStorage {
            slots: HashMap::new(),
            quota: Some(quota),
        }
    }

    fn used_excluding(&self, key: &str) -> usize {
        self.slots
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> DeskcalResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DeskcalResult<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_excluding(key) + key.len() + value.len();
            if needed > quota {
                return Err(DeskcalError::QuotaExceeded { needed, quota });
            }
        }

        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted store, falling back to an empty one.
pub fn load<S: Storage + ?Sized>(storage: &S) -> EventStore {
    match try_load(storage) {
        Ok(Some(store)) => {
            tracing::debug!(events = store.len(), "loaded events");
            store
        }
        Ok(None) => EventStore::new(),
        Err(e) => {
            tracing::warn!("Error loading events: {}", e);
            EventStore::new()
        }
    }
}

fn try_load<S: Storage + ?Sized>(storage: &S) -> DeskcalResult<Option<EventStore>> {
    let Some(raw) = storage.get(EVENTS_KEY)? else {
        return Ok(None);
    };

    Ok(Some(serde_json::from_str(&raw)?))
}

/// Serialize the whole store and write it back. Returns whether the write landed.
pub fn persist<S: Storage + ?Sized>(storage: &mut S, store: &EventStore) -> bool {
    let result = serde_json::to_string(store)
        .map_err(DeskcalError::from)
        .and_then(|json| storage.set(EVENTS_KEY, &json));

    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Error saving events: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_key::DateKey;
    use crate::event::Category;

    fn sample_store() -> EventStore {
        let mut store = EventStore::new();
        store.add_event_at(
            DateKey::parse("2025-07-04").unwrap(),
            "Picnic",
            "12:00",
            Category::Personal,
            1751630400000,
        );
        store
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let storage = MemoryStorage::new();
        assert!(load(&storage).is_empty());
    }

    #[test]
    fn test_load_corrupt_slot_is_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(EVENTS_KEY, "{not json").unwrap();
        assert_eq!(load(&storage), EventStore::new());

        storage.set(EVENTS_KEY, r#"{"2025-7-4": []}"#).unwrap();
        assert_eq!(load(&storage), EventStore::new());
    }

    #[test]
    fn test_persist_then_load_memory() {
        let mut storage = MemoryStorage::new();
        let store = sample_store();

        assert!(persist(&mut storage, &store));
        assert_eq!(load(&storage), store);
    }

    #[test]
    fn test_persist_writes_full_mapping() {
        let mut storage = MemoryStorage::new();
        persist(&mut storage, &sample_store());

        let raw = storage.get(EVENTS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["2025-07-04"][0]["text"], "Picnic");
        assert_eq!(value["2025-07-04"][0]["category"], "personal");
    }

    #[test]
    fn test_persist_over_quota_is_reported_not_raised() {
        let mut storage = MemoryStorage::with_quota(16);
        let store = sample_store();

        assert!(!persist(&mut storage, &store));
        assert!(storage.get(EVENTS_KEY).unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested"));
        let store = sample_store();

        assert!(load(&storage).is_empty());
        assert!(persist(&mut storage, &store));
        assert!(storage.slot_path(EVENTS_KEY).exists());
        assert_eq!(load(&storage), store);
    }

    #[test]
    fn test_file_storage_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        std::fs::write(storage.slot_path(EVENTS_KEY), "[1, 2, 3]").unwrap();

        assert!(load(&storage).is_empty());
    }
}
