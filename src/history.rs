//! Most-recent-first search history mirrored to a key-value store.
//!
//! The list is owned by a `HistoryManager`; every mutation is written back to
//! the store immediately. Ids are unique within the list and the length never
//! exceeds the configured limit.

use crate::config::{HISTORY_LIMIT, HISTORY_STORAGE_KEY};
use crate::error::StorageError;
use crate::models::HistoryEntry;
use crate::storage::KeyValueStore;
use crate::utils::format_display_id;
use log::{debug, warn};
use std::collections::HashSet;

pub struct HistoryManager<S: KeyValueStore> {
    store: S,
    key: String,
    limit: usize,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryManager<S> {
    /// Load history under the default key and limit.
    pub fn load(store: S) -> Self {
        Self::load_with(store, HISTORY_STORAGE_KEY, HISTORY_LIMIT)
    }

    /// Load history from `store`. Missing or unreadable data yields an empty list.
    pub fn load_with(store: S, key: &str, limit: usize) -> Self {
        let entries = match store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(list) => normalize(list, limit),
                Err(e) => {
                    warn!("Ignoring malformed history under '{}': {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read history: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} history entries", entries.len());

        Self {
            store,
            key: key.to_string(),
            limit,
            entries,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move `entry` to the front, dropping any older entry with the same id
    /// and anything beyond the limit, then persist.
    ///
    /// The in-memory list is updated even when persisting fails.
    pub fn record(&mut self, entry: HistoryEntry) -> Result<(), StorageError> {
        self.entries.retain(|e| e.id != entry.id);
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
        self.persist()
    }

    /// Empty the list and drop the persisted copy if `confirm` agrees.
    /// Returns whether anything was cleared.
    pub fn clear(&mut self, confirm: impl FnOnce() -> bool) -> Result<bool, StorageError> {
        if !confirm() {
            return Ok(false);
        }
        self.entries.clear();
        self.store.remove(&self.key)?;
        Ok(true)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.set(&self.key, &raw)
    }
}

/// Enforce uniqueness and the length bound on data read back from storage.
fn normalize(list: Vec<HistoryEntry>, limit: usize) -> Vec<HistoryEntry> {
    let mut seen = HashSet::new();
    list.into_iter()
        .filter(|e| seen.insert(e.id))
        .take(limit)
        .map(|mut e| {
            if e.display_id.is_empty() {
                e.display_id = format_display_id(e.id);
            }
            e
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use proptest::prelude::*;
    use rstest::rstest;

    fn entry(id: u32, name: &str) -> HistoryEntry {
        HistoryEntry {
            id,
            name: name.to_string(),
            image_url: format!("https://img/{}.png", id),
            display_id: format_display_id(id),
        }
    }

    fn ids<S: KeyValueStore>(mgr: &HistoryManager<S>) -> Vec<u32> {
        mgr.entries().iter().map(|e| e.id).collect()
    }

    #[test]
    fn rerecording_moves_entry_to_front() {
        let mut mgr = HistoryManager::load(MemoryStore::default());
        mgr.record(entry(25, "pikachu")).unwrap();
        mgr.record(entry(4, "charmander")).unwrap();
        mgr.record(entry(25, "pikachu")).unwrap();

        assert_eq!(ids(&mgr), vec![25, 4]);
    }

    #[test]
    fn record_evicts_oldest_beyond_limit() {
        let mut mgr = HistoryManager::load(MemoryStore::default());
        for id in 1..=12 {
            mgr.record(entry(id, "p")).unwrap();
        }
        assert_eq!(mgr.len(), HISTORY_LIMIT);
        assert_eq!(ids(&mgr), (3..=12).rev().collect::<Vec<_>>());
    }

    #[test]
    fn record_persists_and_reloads() {
        let mut mgr = HistoryManager::load(MemoryStore::default());
        mgr.record(entry(1, "bulbasaur")).unwrap();
        mgr.record(entry(7, "squirtle")).unwrap();

        let store = mgr.store().clone();
        let reloaded = HistoryManager::load(store);
        assert_eq!(reloaded.entries(), mgr.entries());
    }

    #[test]
    fn clear_denied_keeps_everything() {
        let mut mgr = HistoryManager::load(MemoryStore::default());
        mgr.record(entry(25, "pikachu")).unwrap();

        assert!(!mgr.clear(|| false).unwrap());
        assert_eq!(ids(&mgr), vec![25]);
        assert!(mgr.store().contains(HISTORY_STORAGE_KEY));
    }

    #[test]
    fn clear_granted_empties_and_removes_persisted_copy() {
        let mut mgr = HistoryManager::load(MemoryStore::default());
        mgr.record(entry(25, "pikachu")).unwrap();

        assert!(mgr.clear(|| true).unwrap());
        assert!(mgr.is_empty());
        assert!(!mgr.store().contains(HISTORY_STORAGE_KEY));
    }

    #[rstest]
    #[case("not json")]
    #[case("{\"id\": 1}")]
    #[case("[{\"name\": \"no id\"}]")]
    #[case("null")]
    #[case("")]
    fn malformed_data_loads_as_empty(#[case] raw: &str) {
        let mgr = HistoryManager::load(MemoryStore::with_item(HISTORY_STORAGE_KEY, raw));
        assert!(mgr.is_empty());
    }

    #[test]
    fn absent_data_loads_as_empty() {
        let mgr = HistoryManager::load(MemoryStore::default());
        assert!(mgr.is_empty());
    }

    #[test]
    fn load_drops_duplicates_and_caps_length() {
        let mut list: Vec<HistoryEntry> = (1..=15).map(|id| entry(id, "p")).collect();
        list.insert(1, entry(1, "dup"));
        let raw = serde_json::to_string(&list).unwrap();

        let mgr = HistoryManager::load(MemoryStore::with_item(HISTORY_STORAGE_KEY, &raw));
        assert_eq!(ids(&mgr), (1..=10).collect::<Vec<_>>());
        assert_eq!(mgr.entries()[0].name, "p");
    }

    #[test]
    fn load_fills_missing_display_id() {
        let raw = r#"[{"id":4,"name":"charmander","image":"c.png"}]"#;
        let mgr = HistoryManager::load(MemoryStore::with_item(HISTORY_STORAGE_KEY, raw));
        assert_eq!(mgr.entries()[0].display_id, "004");
    }

    #[test]
    fn load_keeps_legacy_entries_with_null_image() {
        let raw = r#"[
            {"id":25,"name":"pikachu","image":"p.png","formattedId":"025"},
            {"id":10080,"name":"pikachu-rock-star","image":null,"formattedId":"10080"}
        ]"#;
        let mgr = HistoryManager::load(MemoryStore::with_item(HISTORY_STORAGE_KEY, raw));
        assert_eq!(ids(&mgr), vec![25, 10080]);
        assert_eq!(mgr.entries()[1].image_url, "");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn history_stays_bounded_and_unique(seq in prop::collection::vec(1u32..30, 0..60)) {
            let mut mgr = HistoryManager::load(MemoryStore::default());
            for id in &seq {
                mgr.record(entry(*id, "p")).unwrap();
                let current = ids(&mgr);
                let unique: HashSet<u32> = current.iter().copied().collect();
                prop_assert!(current.len() <= HISTORY_LIMIT);
                prop_assert_eq!(unique.len(), current.len());
                prop_assert_eq!(current[0], *id);
            }
        }
    }
}
