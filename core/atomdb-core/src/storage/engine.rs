//! Storage Engine — single entry point for persistence plus index lookup.
//!
//! The engine owns exactly one backend, chosen at construction, and the
//! secondary-index table (column name → [`Index`]). Recoverable I/O
//! conditions are reported and absorbed here; they never unwind past the
//! engine boundary. Only the configuration error at construction is fatal.

use crate::error::AtomResult;
use crate::index::{Index, StrategyKind};
use crate::storage::file::DEFAULT_FILE_PATH;
use crate::storage::{BackendKind, FileBackend, MemoryBackend, StorageBackend};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Storage engine owning one backend and the secondary-index table.
pub struct StorageEngine {
    backend: Box<dyn StorageBackend>,
    // Ordered map so cross-column search results are deterministic.
    indexes: RwLock<BTreeMap<String, Index>>,
}

impl std::fmt::Debug for StorageEngine {
    // Manual impl: the boxed `dyn StorageBackend` has no `Debug` bound.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageEngine").finish_non_exhaustive()
    }
}

impl StorageEngine {
    /// Build an engine from a backend-kind token (`"memory"` or `"file"`).
    ///
    /// The `"file"` token uses [`DEFAULT_FILE_PATH`]. Any other token fails
    /// with [`AtomError::UnknownBackend`](crate::AtomError::UnknownBackend).
    pub fn new(backend_kind: &str) -> AtomResult<Self> {
        let backend: Box<dyn StorageBackend> = match backend_kind.parse::<BackendKind>()? {
            BackendKind::Memory => Box::new(MemoryBackend::new()),
            BackendKind::File => Box::new(FileBackend::new(DEFAULT_FILE_PATH)),
        };
        info!(backend = backend_kind, "storage engine initialized");
        Ok(Self::with_backend(backend))
    }

    /// Build an engine over an explicit backend instance.
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            indexes: RwLock::new(BTreeMap::new()),
        }
    }

    /// Append a record through the backend.
    ///
    /// An I/O failure is reported and absorbed: the store becomes a no-op
    /// and the session continues.
    pub fn store_data(&self, record: &str) {
        if let Err(err) = self.backend.store(record) {
            warn!(%err, "store failed; record dropped");
        }
    }

    /// Return every stored record in append order.
    ///
    /// An I/O failure is reported and yields an empty sequence.
    pub fn retrieve_data(&self) -> Vec<String> {
        match self.backend.retrieve_all() {
            Ok(records) => records,
            Err(err) => {
                warn!(%err, "retrieve failed; returning no records");
                Vec::new()
            }
        }
    }

    /// Install an empty hash index for `column`.
    ///
    /// Replaces any prior index for that column without error (idempotent
    /// overwrite).
    pub fn create_index(&self, column: &str) {
        self.create_index_with(column, StrategyKind::Hash);
    }

    /// Install an empty index for `column` with an explicit strategy,
    /// replacing any prior index for that column.
    pub fn create_index_with(&self, column: &str, strategy: StrategyKind) {
        debug!(column, ?strategy, "index created");
        self.indexes
            .write()
            .insert(column.to_string(), Index::new(column, strategy));
    }

    /// Append `row_id` under `key` in `column`'s index.
    ///
    /// An unknown column is a lookup miss, not an error: the call is a
    /// silent no-op.
    pub fn add_index_entry(&self, column: &str, key: &str, row_id: usize) {
        if let Some(index) = self.indexes.write().get_mut(column) {
            index.add(key, row_id);
        }
    }

    /// Names of the indexed columns, in index-table iteration order.
    pub fn indexed_columns(&self) -> Vec<String> {
        self.indexes.read().keys().cloned().collect()
    }

    /// Scan every column's index for an exact key match of `value`.
    ///
    /// Returns the matching row ids rendered as text, concatenated in
    /// index-table iteration order then per-column insertion order. This is
    /// a deliberately naive linear scan; callers that know the column should
    /// prefer the [`Index`] point lookup.
    pub fn search_index(&self, value: &str) -> Vec<String> {
        let indexes = self.indexes.read();
        let mut results = Vec::new();
        for index in indexes.values() {
            for row_id in index.get(value) {
                results.push(row_id.to_string());
            }
        }
        results
    }
}
