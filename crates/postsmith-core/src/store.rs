//! Key/value persistence contract.
//!
//! Storage here is advisory. [`KeyValueStore`] reports failures honestly, but
//! the typed helpers in [`StoreExt`] swallow them: reads fall back to the
//! caller's default and writes are logged and dropped. Callers must not rely
//! on a value surviving a restart.

use crate::error::Result;
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use std::sync::Mutex;

/// Raw key/value storage holding JSON text.
///
/// Writes are synchronously visible to subsequent reads of the same key;
/// the last write wins.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored text for `key`, or `None` when nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the stored text for `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Typed best-effort access on top of any [`KeyValueStore`].
pub trait StoreExt {
    /// Loads and deserializes `key`, returning `default` when the value is
    /// missing, unreadable or unparsable. Never fails.
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T;

    /// Serializes and stores `value`. Failures are logged and swallowed.
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T);
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {
    fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::warn!("[Store] Failed to read '{}': {}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("[Store] Ignoring unparsable value for '{}': {}", key, e);
                default
            }
        }
    }

    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("[Store] Failed to serialize '{}': {}", key, e);
                return;
            }
        };

        if let Err(e) = self.write(key, &raw) {
            tracing::warn!("[Store] Failed to write '{}': {}", key, e);
        }
    }
}

/// In-process store. Nothing outlives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| crate::error::PostsmithError::internal(format!("store poisoned: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| crate::error::PostsmithError::internal(format!("store poisoned: {e}")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostsmithError;

    /// A store whose every operation fails, like storage in a locked-down
    /// environment.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Err(PostsmithError::io("storage unavailable"))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<()> {
            Err(PostsmithError::io("storage unavailable"))
        }
    }

    #[test]
    fn test_get_or_missing_returns_default() {
        let store = MemoryStore::new();
        let value: Vec<String> = store.get_or("nothing", vec!["fallback".to_string()]);
        assert_eq!(value, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("numbers", &vec![1, 2, 3]);
        let value: Vec<u32> = store.get_or("numbers", Vec::new());
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::new();
        store.set("key", "first");
        store.set("key", "second");
        assert_eq!(store.get_or("key", String::new()), "second");
    }

    #[test]
    fn test_corrupt_value_returns_default() {
        let store = MemoryStore::new();
        store.write("key", "{ not json").unwrap();
        assert_eq!(store.get_or("key", 7u32), 7);
    }

    #[test]
    fn test_broken_store_is_swallowed() {
        let store = BrokenStore;
        store.set("key", &42u32);
        assert_eq!(store.get_or("key", 1u32), 1);
    }
}
