//! Bounded history of generated posts.

use std::sync::Arc;

use super::model::{HISTORY_LIMIT, HistoryEntry};
use crate::store::{KeyValueStore, StoreExt};

/// Store key holding the serialized ledger.
pub const HISTORY_KEY: &str = "history";

/// Newest-first list of past generations, capped at [`HISTORY_LIMIT`].
///
/// The ledger owns its entries. They can only be added at the front; the
/// oldest ones fall off the tail on overflow. Every change is written back to
/// the store under its own key, independently of the settings.
pub struct HistoryLedger {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    /// Loads the persisted ledger, or starts empty.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let mut entries: Vec<HistoryEntry> = store.get_or(HISTORY_KEY, Vec::new());
        entries.truncate(HISTORY_LIMIT);
        Self { store, entries }
    }

    /// Inserts `entry` as the newest item and persists the bounded list.
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
        self.persist();
    }

    /// Entries, newest first.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the whole ledger. Settings are untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&self) {
        self.store.set(HISTORY_KEY, &self.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry {
            text: format!("post {n}"),
            source_url: format!("https://{n}.example"),
            timestamp: format!("t{n}"),
        }
    }

    #[test]
    fn test_starts_empty() {
        let ledger = HistoryLedger::load(Arc::new(MemoryStore::new()));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_prepend_is_newest_first() {
        let mut ledger = HistoryLedger::load(Arc::new(MemoryStore::new()));
        ledger.prepend(entry(1));
        ledger.prepend(entry(2));
        assert_eq!(ledger.list()[0], entry(2));
        assert_eq!(ledger.list()[1], entry(1));
    }

    #[test]
    fn test_bounded_to_limit() {
        let mut ledger = HistoryLedger::load(Arc::new(MemoryStore::new()));
        for n in 0..75 {
            ledger.prepend(entry(n));
        }

        assert_eq!(ledger.len(), HISTORY_LIMIT);
        // 50 most recent in reverse chronological order: 74, 73, ..., 25
        for (i, e) in ledger.list().iter().enumerate() {
            assert_eq!(e, &entry(74 - i));
        }
    }

    #[test]
    fn test_persists_across_loads() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        {
            let mut ledger = HistoryLedger::load(store.clone());
            ledger.prepend(entry(1));
            ledger.prepend(entry(2));
        }

        let reloaded = HistoryLedger::load(store);
        assert_eq!(reloaded.list(), &[entry(2), entry(1)]);
    }

    #[test]
    fn test_clear_persists() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut ledger = HistoryLedger::load(store.clone());
        ledger.prepend(entry(1));
        ledger.clear();

        assert!(ledger.is_empty());
        assert!(HistoryLedger::load(store).is_empty());
    }

    #[test]
    fn test_corrupt_history_loads_empty() {
        let store = Arc::new(MemoryStore::new());
        store.write(HISTORY_KEY, "[{\"broken\":").unwrap();
        let ledger = HistoryLedger::load(store);
        assert!(ledger.is_empty());
    }
}
