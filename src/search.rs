//! Linear record search
//!
//! Two matching rules live here and are kept apart on purpose: `find_by`
//! is an exact, single-field, first-match lookup; `keyword_scan` is a
//! prefix match across every field that returns all hits.

use crate::record::{Field, Record};
use crate::store::RecordStore;

/// Exact, case-sensitive comparison of one attribute
pub fn matches_exact(record: &Record, field: Field, query: &str) -> bool {
    record.get(field) == query
}

/// True when any attribute starts with `keyword` (case-sensitive)
///
/// The empty keyword matches every record.
pub fn matches_keyword(record: &Record, keyword: &str) -> bool {
    record.values().any(|value| value.starts_with(keyword))
}

impl RecordStore {
    /// First record whose `field` equals `query`
    pub fn find_by(&self, field: Field, query: &str) -> Option<&Record> {
        self.iter().find(|record| matches_exact(record, field, query))
    }

    /// Position of the first record whose `field` equals `query`
    pub fn find_position_by(&self, field: Field, query: &str) -> Option<usize> {
        self.iter()
            .position(|record| matches_exact(record, field, query))
    }

    /// Every record with an attribute starting with `keyword`, in store order
    pub fn keyword_scan(&self, keyword: &str) -> Vec<&Record> {
        self.iter()
            .filter(|record| matches_keyword(record, keyword))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordStore {
        [
            Record::new("Ann", "Lee", "ann@x.com", "123"),
            Record::new("Bob", "Alison", "bob@x.com", "456"),
            Record::new("Ann", "Roe", "ann@y.com", "789"),
            Record::new("alice", "Kay", "ak@x.com", "123"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_find_by_returns_first_match() {
        let store = sample();
        let found = store.find_by(Field::Name, "Ann").unwrap();
        assert_eq!(found.surname(), "Lee");
        assert_eq!(store.find_position_by(Field::Name, "Ann"), Some(0));
        assert_eq!(store.find_position_by(Field::Phone, "123"), Some(0));
    }

    #[test]
    fn test_find_by_each_field() {
        let store = sample();
        assert_eq!(store.find_by(Field::Surname, "Roe").unwrap().email(), "ann@y.com");
        assert_eq!(store.find_by(Field::Email, "bob@x.com").unwrap().name(), "Bob");
        assert_eq!(store.find_by(Field::Phone, "789").unwrap().surname(), "Roe");
    }

    #[test]
    fn test_find_by_is_exact_and_case_sensitive() {
        let store = sample();
        assert!(store.find_by(Field::Name, "An").is_none());
        assert!(store.find_by(Field::Name, "ann").is_none());
        assert!(store.find_by(Field::Email, "ANN@X.COM").is_none());
        assert_eq!(store.find_position_by(Field::Name, "Zed"), None);
    }

    #[test]
    fn test_keyword_scan_matches_any_field_prefix() {
        let store = sample();
        let hits: Vec<&str> = store.keyword_scan("Ali").iter().map(|r| r.name()).collect();
        assert_eq!(hits, vec!["Bob"]);

        let hits: Vec<&str> = store.keyword_scan("ali").iter().map(|r| r.name()).collect();
        assert_eq!(hits, vec!["alice"]);
    }

    #[test]
    fn test_keyword_scan_returns_all_in_order() {
        let store = sample();
        let hits: Vec<&str> = store.keyword_scan("12").iter().map(|r| r.name()).collect();
        assert_eq!(hits, vec!["Ann", "alice"]);
    }

    #[test]
    fn test_keyword_scan_is_prefix_only() {
        let store = sample();
        // "x.com" appears inside emails but never at the start of a field
        assert!(store.keyword_scan("x.com").is_empty());
    }

    #[test]
    fn test_keyword_scan_empty_keyword_matches_all() {
        let store = sample();
        assert_eq!(store.keyword_scan("").len(), store.len());
    }

    #[test]
    fn test_search_on_empty_store() {
        let store = RecordStore::new();
        assert!(store.find_by(Field::Name, "Ann").is_none());
        assert!(store.keyword_scan("A").is_empty());
    }
}
