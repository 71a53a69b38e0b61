//! Ordered index strategy.
//!
//! Keys are kept in sorted order so future range scans can walk them.
//! Point-lookup behavior is identical to the hash strategy; only the cost
//! profile differs (O(log n) insert and lookup).

use crate::index::{IndexStrategy, RowId};
use std::collections::BTreeMap;

/// Ordered key → row-id map over a B-tree.
#[derive(Debug, Default)]
pub struct OrderedStrategy {
    entries: BTreeMap<String, Vec<RowId>>,
}

impl OrderedStrategy {
    /// Create an empty ordered strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexed keys in sorted order.
    pub fn sorted_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

impl IndexStrategy for OrderedStrategy {
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
