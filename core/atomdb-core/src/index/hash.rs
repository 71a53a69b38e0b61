//! Hash index strategy.
//!
//! O(1) average-case point lookup with no ordering guarantee across
//! distinct keys.

use crate::index::{IndexStrategy, RowId};
use ahash::AHashMap;

/// Hash-based key → row-id map.
#[derive(Debug, Default)]
pub struct HashStrategy {
    entries: AHashMap<String, Vec<RowId>>,
}

impl HashStrategy {
    /// Create an empty hash strategy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndexStrategy for HashStrategy {
    fn add_entry(&mut self, key: &str, row_id: RowId) {
        self.entries.entry(key.to_string()).or_default().push(row_id);
    }

    fn entries(&self, key: &str) -> Vec<RowId> {
        self.entries.get(key).cloned().unwrap_or_default()
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
