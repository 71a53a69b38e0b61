//! Pending-change buffer for the active transaction.

/// Ordered sequence of change statements buffered while a transaction is
/// active.
///
/// Owned exclusively by the current transaction: replayed wholesale on
/// commit, dropped wholesale on abort, never partially applied.
#[derive(Debug, Default)]
pub struct TransactionData {
    changes: Vec<String>,
}

impl TransactionData {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a change statement. No size or dedup constraint.
    pub fn add_change(&mut self, change: impl Into<String>) {
        self.changes.push(change.into());
    }

    /// Buffered changes in recorded order.
    pub fn changes(&self) -> &[String] {
        &self.changes
    }

    /// Number of buffered changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Consume the buffer, yielding changes in recorded order.
    pub fn into_changes(self) -> Vec<String> {
        self.changes
    }
}
