//! Saved-id persistence.
//!
//! The whole set is read once when the page mounts and written once when it
//! goes away; there are no incremental writes.

use artfind_common::SavedIdSet;
use std::cell::RefCell;
use tracing::warn;

/// Key/value store holding the serialized [`SavedIdSet`].
pub trait SavedIdStore {
    /// Read the set; empty when nothing is stored or the value is unreadable.
    fn load(&self) -> SavedIdSet;

    /// Replace the stored set.
    fn save(&self, ids: &SavedIdSet);
}

/// Decode a stored value, falling back to an empty set.
pub fn decode_saved_ids(raw: Option<&str>) -> SavedIdSet {
    match raw {
        None => SavedIdSet::new(),
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!("Discarding unreadable saved ids: {}", e);
            SavedIdSet::new()
        }),
    }
}

pub fn encode_saved_ids(ids: &SavedIdSet) -> String {
    // A set of strings always serializes
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
}

/// In-process store, for hosts without browser storage.
#[derive(Debug, Default)]
pub struct MemoryIdStore {
    raw: RefCell<Option<String>>,
}

impl MemoryIdStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-serialized value.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl SavedIdStore for MemoryIdStore {
    fn load(&self) -> SavedIdSet {
        decode_saved_ids(self.raw.borrow().as_deref())
    }

    fn save(&self, ids: &SavedIdSet) {
        *self.raw.borrow_mut() = Some(encode_saved_ids(ids));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_empty_set() {
        assert!(MemoryIdStore::new().load().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryIdStore::new();
        let ids: SavedIdSet = ["abc", "def", "xyz"].into_iter().collect();
        store.save(&ids);
        assert_eq!(store.load(), ids);
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let store = MemoryIdStore::new();
        store.save(&["a", "b"].into_iter().collect());
        store.save(&["c"].into_iter().collect());
        let expected: SavedIdSet = ["c"].into_iter().collect();
        assert_eq!(store.load(), expected);
    }

    #[test]
    fn test_unparseable_value_loads_empty_set() {
        assert!(MemoryIdStore::with_raw("{not json").load().is_empty());
        assert!(MemoryIdStore::with_raw(r#"{"ids":["a"]}"#).load().is_empty());
    }

    #[test]
    fn test_stored_as_json_array() {
        let store = MemoryIdStore::new();
        store.save(&["abc"].into_iter().collect());
        assert_eq!(store.raw().as_deref(), Some(r#"["abc"]"#));
    }
}
