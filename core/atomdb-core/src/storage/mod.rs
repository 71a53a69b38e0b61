//! Storage module — pluggable persistence backends.
//!
//! Every backend implements the [`StorageBackend`] trait; the engine and the
//! transaction layer depend only on this trait, never on concrete types.

pub mod engine;
pub mod file;
pub mod memory;

pub use engine::StorageEngine;
pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::{AtomError, AtomResult};
use std::str::FromStr;

/// Core storage interface — append-only persistence of opaque text records.
///
/// # Contract
///
/// - `store`: appends one record. Once appended, a record is never mutated
///   or reordered.
/// - `retrieve_all`: returns every record in append order. Durable backends
///   re-read the backing medium on each call (no caching across calls).
pub trait StorageBackend: Send + Sync {
    /// Append a record.
    fn store(&self, record: &str) -> AtomResult<()>;

    /// Return all records in append order.
    fn retrieve_all(&self) -> AtomResult<Vec<String>>;
}

/// Backend selection, fixed once at engine construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Volatile in-process record list
    Memory,
    /// Durable append-only line file
    File,
}

impl FromStr for BackendKind {
    type Err = AtomError;

    fn from_str(token: &str) -> AtomResult<Self> {
        match token {
            "memory" => Ok(BackendKind::Memory),
            "file" => Ok(BackendKind::File),
            other => Err(AtomError::UnknownBackend(other.to_string())),
        }
    }
}
