//! Ordered, position-addressable record storage
//!
//! Records live in a single growable array. Positions are zero-based and
//! stable between mutations. `get` is O(1); `insert` and `delete` shift the
//! tail and are O(len); `append` is amortised O(1).

use tracing::debug;

use crate::error::{AddrBookError, Result};
use crate::record::Record;

/// Owns every record in the address book, in order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add a record as the new last element
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
        debug!(len = self.records.len(), "appended record");
    }

    /// Insert a record so it becomes the element at `pos`
    ///
    /// Valid for `pos <= len`; `pos == len` appends. Out-of-range positions
    /// leave the store untouched.
    pub fn insert(&mut self, pos: usize, record: Record) -> Result<()> {
        let len = self.records.len();
        if pos > len {
            return Err(AddrBookError::PositionOutOfRange { pos, len });
        }
        self.records.insert(pos, record);
        debug!(pos, len = len + 1, "inserted record");
        Ok(())
    }

    /// Remove and return the record at `pos`
    pub fn delete(&mut self, pos: usize) -> Result<Record> {
        let len = self.records.len();
        if pos >= len {
            return Err(AddrBookError::PositionOutOfRange { pos, len });
        }
        let removed = self.records.remove(pos);
        debug!(pos, len = len - 1, "deleted record");
        Ok(removed)
    }

    /// Get the record at `pos`, or `None` if there is none
    pub fn get(&self, pos: usize) -> Option<&Record> {
        self.records.get(pos)
    }

    /// Drop every record
    pub fn clear(&mut self) {
        if !self.records.is_empty() {
            debug!(len = self.records.len(), "clearing store");
        }
        self.records.clear();
    }

    /// Get number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in store order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        for record in iter {
            store.append(record);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Record {
        Record::new(name, "", "", "")
    }

    fn names(store: &RecordStore) -> Vec<&str> {
        store.iter().map(Record::name).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get(0).is_none());
    }

    #[test]
    fn test_append_preserves_order() {
        let store: RecordStore = ["a", "b", "c"].into_iter().map(named).collect();
        assert_eq!(names(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_insert_at_head_middle_and_end() {
        let mut store: RecordStore = ["b", "d"].into_iter().map(named).collect();
        store.insert(0, named("a")).unwrap();
        store.insert(2, named("c")).unwrap();
        store.insert(4, named("e")).unwrap();
        assert_eq!(names(&store), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_insert_into_empty_store() {
        let mut store = RecordStore::new();
        store.insert(0, named("a")).unwrap();
        assert_eq!(names(&store), vec!["a"]);
    }

    #[test]
    fn test_insert_past_end_fails_without_mutation() {
        let mut store: RecordStore = ["a"].into_iter().map(named).collect();
        let err = store.insert(2, named("z")).unwrap_err();
        assert!(matches!(
            err,
            AddrBookError::PositionOutOfRange { pos: 2, len: 1 }
        ));
        assert_eq!(names(&store), vec!["a"]);
    }

    #[test]
    fn test_delete_shifts_tail() {
        let mut store: RecordStore = ["a", "b", "c"].into_iter().map(named).collect();
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(names(&store), vec!["a", "c"]);
    }

    #[test]
    fn test_delete_on_empty_store_fails() {
        let mut store = RecordStore::new();
        assert!(matches!(
            store.delete(0),
            Err(AddrBookError::PositionOutOfRange { pos: 0, len: 0 })
        ));
    }

    #[test]
    fn test_get_out_of_range() {
        let store: RecordStore = ["a", "b"].into_iter().map(named).collect();
        assert_eq!(store.get(1).map(Record::name), Some("b"));
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store: RecordStore = ["a", "b"].into_iter().map(named).collect();
        store.clear();
        assert_eq!(store.len(), 0);
        store.clear();
        assert!(store.is_empty());
        assert!(store.get(0).is_none());
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let store: RecordStore = ["a", "b"].into_iter().map(named).collect();
        let mut seen = Vec::new();
        for record in &store {
            seen.push(record.name());
        }
        assert_eq!(seen, vec!["a", "b"]);
    }
}
