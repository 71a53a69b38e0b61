//! Secondary indexing — pluggable key → row-id strategies.
//!
//! An [`Index`] binds one column name to exactly one owned
//! [`IndexStrategy`]. The two strategies expose identical point-lookup
//! behavior; they differ only in internal organization and performance.

pub mod hash;
pub mod ordered;

pub use hash::HashStrategy;
pub use ordered::OrderedStrategy;

/// Row identifier stored in index entries.
pub type RowId = usize;

/// Key → row-id lookup algorithm bound to one column.
///
/// # Contract
///
/// - `add_entry`: appends `row_id` under `key`, creating the entry if
///   absent. Never fails.
/// - `entries`: row ids for `key` in insertion order; empty if the key is
///   absent — absence is not an error.
/// - `contains`: true iff `key` has seen at least one `add_entry`.
pub trait IndexStrategy: Send + Sync {
    /// Append `row_id` to the entry list for `key`.
    fn add_entry(&mut self, key: &str, row_id: RowId);

    /// Entry list for `key`, empty if absent.
    fn entries(&self, key: &str) -> Vec<RowId>;

    /// Whether `key` has at least one entry.
    fn contains(&self, key: &str) -> bool;
}

/// Strategy selection, fixed when the column's index is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// O(1) average point lookup, no cross-key ordering
    Hash,
    /// Sorted keys, O(log n) operations, range-friendly
    Ordered,
}

/// A column's index: one bound column name, one owned strategy.
pub struct Index {
    column: String,
    strategy: Box<dyn IndexStrategy>,
}

impl Index {
    /// Create an empty index for `column` with the given strategy.
    pub fn new(column: impl Into<String>, kind: StrategyKind) -> Self {
        let strategy: Box<dyn IndexStrategy> = match kind {
            StrategyKind::Hash => Box::new(HashStrategy::new()),
            StrategyKind::Ordered => Box::new(OrderedStrategy::new()),
        };
        Self {
            column: column.into(),
            strategy,
        }
    }

    /// Append `row_id` under `key`.
    pub fn add(&mut self, key: &str, row_id: RowId) {
        self.strategy.add_entry(key, row_id);
    }

    /// Row ids recorded for `key`, in insertion order.
    pub fn get(&self, key: &str) -> Vec<RowId> {
        self.strategy.entries(key)
    }

    /// Whether `key` has at least one recorded row id.
    pub fn has(&self, key: &str) -> bool {
        self.strategy.contains(key)
    }

    /// The column this index is bound to.
    pub fn column_name(&self) -> &str {
        &self.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binder_forwards_to_strategy() {
        let mut index = Index::new("name", StrategyKind::Hash);
        index.add("Alice", 0);
        index.add("Alice", 2);

        assert_eq!(index.column_name(), "name");
        assert!(index.has("Alice"));
        assert_eq!(index.get("Alice"), vec![0, 2]);
    }

    #[test]
    fn test_absent_key_is_not_an_error() {
        for kind in [StrategyKind::Hash, StrategyKind::Ordered] {
            let index = Index::new("name", kind);
            assert!(!index.has("ghost"));
            assert!(index.get("ghost").is_empty());
        }
    }

    #[test]
    fn test_duplicate_row_ids_are_kept_per_add() {
        let mut index = Index::new("age", StrategyKind::Ordered);
        index.add("30", 1);
        index.add("30", 1);

        assert_eq!(index.get("30"), vec![1, 1]);
    }
}
