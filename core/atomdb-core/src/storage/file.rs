//! Durable append-only file backend.
//!
//! One record per line, UTF-8 text, no header or checksum. Writes open the
//! file in append mode; retrieval re-reads the file from the start on every
//! call, so a fresh engine pointed at the same file sees all prior records.

use crate::error::AtomResult;
use crate::storage::StorageBackend;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Backing file used when the engine is built from the `"file"` token.
pub const DEFAULT_FILE_PATH: &str = "database.txt";

/// File-backed storage backend.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend over the given file path. The file is created lazily
    /// on the first `store`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn store(&self, record: &str) -> AtomResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{record}")?;
        Ok(())
    }

    fn retrieve_all(&self) -> AtomResult<Vec<String>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            // Nothing stored yet; an absent file is an empty sequence.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            records.push(line?);
        }
        Ok(records)
    }
}
