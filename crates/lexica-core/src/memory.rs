//! In-memory concept store.
//!
//! Used by unit tests and by embedders that do not need persistence. Mirrors
//! the SQLite backend's observable behavior, including bootstrap reporting.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::concept::AdjectiveSet;
use crate::store::{ConceptStore, StorageResult};

#[derive(Debug, Default)]
struct Inner {
    bootstrapped: bool,
    records: BTreeMap<String, AdjectiveSet>,
}

/// Thread-safe in-memory implementation of [`ConceptStore`].
#[derive(Debug, Default)]
pub struct MemoryConceptStore {
    inner: RwLock<Inner>,
}

impl MemoryConceptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored roots.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }
}

impl ConceptStore for MemoryConceptStore {
    fn lookup(&self, root: &str) -> StorageResult<Option<AdjectiveSet>> {
        Ok(self.inner.read().records.get(root).cloned())
    }

    fn upsert(&self, root: &str, adjective: &str) -> StorageResult<bool> {
        let mut inner = self.inner.write();
        match inner.records.get_mut(root) {
            Some(set) => Ok(set.insert(adjective)),
            None => {
                inner
                    .records
                    .insert(root.to_string(), AdjectiveSet::single(adjective));
                Ok(true)
            }
        }
    }

    fn clear(&self) -> StorageResult<bool> {
        let mut inner = self.inner.write();
        let had_records = !inner.records.is_empty();
        inner.records.clear();
        Ok(had_records)
    }

    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.inner.read().records.is_empty())
    }

    fn bootstrap(&self) -> StorageResult<bool> {
        let mut inner = self.inner.write();
        let created = !inner.bootstrapped;
        inner.bootstrapped = true;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_creates_then_merges() {
        let store = MemoryConceptStore::new();
        assert!(store.upsert("car", "red").unwrap());
        assert!(store.upsert("car", "blue").unwrap());
        assert!(!store.upsert("car", "red").unwrap());

        let set = store.lookup("car").unwrap().unwrap();
        assert!(set.contains("red"));
        assert!(set.contains("blue"));
        assert_eq!(set.len(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn lookup_is_exact_match() {
        let store = MemoryConceptStore::new();
        store.upsert("car", "red").unwrap();
        assert!(store.lookup("Car").unwrap().is_none());
        assert!(store.lookup("car ").unwrap().is_none());
    }

    #[test]
    fn clear_reports_whether_anything_existed() {
        let store = MemoryConceptStore::new();
        assert!(!store.clear().unwrap());
        store.upsert("car", "red").unwrap();
        assert!(store.clear().unwrap());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn bootstrap_is_idempotent() {
        let store = MemoryConceptStore::new();
        assert!(store.bootstrap().unwrap());
        assert!(!store.bootstrap().unwrap());
    }
}
