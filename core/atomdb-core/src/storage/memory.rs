//! Volatile in-memory backend.
//!
//! Backed by an ordered in-process record list; contents do not survive the
//! session. `store` is amortized O(1), `retrieve_all` is an O(n) copy.

use crate::error::AtomResult;
use crate::storage::StorageBackend;
use parking_lot::RwLock;

/// In-memory storage backend over an ordered record list.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: RwLock<Vec<String>>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether no records have been stored.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn store(&self, record: &str) -> AtomResult<()> {
        self.records.write().push(record.to_string());
        Ok(())
    }

    fn retrieve_all(&self) -> AtomResult<Vec<String>> {
        Ok(self.records.read().clone())
    }
}
