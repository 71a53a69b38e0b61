//! # AtomDB — Minimal Transactional Storage Kernel
//!
//! AtomDB is a single-writer storage kernel combining three concerns that
//! must stay consistent: pluggable persistence (volatile memory or a durable
//! append-only file), secondary-index maintenance (hash or ordered
//! strategies), and a transaction state machine that buffers writes and
//! applies or discards them atomically.
//!
//! ## Quick start
//!
//! ```rust
//! use atomdb_core::Database;
//!
//! # fn main() -> atomdb_core::AtomResult<()> {
//! let mut db = Database::open_in_memory()?;
//!
//! db.insert("INSERT INTO users VALUES (1, 'Alice', 30);");
//!
//! db.begin();
//! db.insert("INSERT INTO users VALUES (2, 'Bob', 25);");
//! // Buffered writes are invisible until commit.
//! assert_eq!(db.execute_query("SELECT * FROM users;")?.len(), 1);
//!
//! db.commit()?;
//! assert_eq!(db.execute_query("SELECT * FROM users;")?.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! statement text → QueryRouter ──reads──→ StorageEngine ──→ StorageBackend
//!                      │                        │              (memory | file)
//!                    writes                  index table
//!                      │                        └──→ Index ──→ IndexStrategy
//!                      ▼                                        (hash | ordered)
//!               TransactionManager ──commit replay──→ StorageEngine
//! ```
//!
//! ## Module structure
//!
//! - [`database`] — session object ([`Database`])
//! - [`storage`] — storage engine and backends
//! - [`index`] — secondary-index strategies
//! - [`transaction`] — transaction state machine and pending-change buffer
//! - [`query`] — statement classification and routing

pub mod database;
pub mod error;
pub mod index;
pub mod query;
pub mod storage;
pub mod transaction;

// Logging utilities
pub mod logging;

// Re-export commonly used types
pub use database::Database;
pub use error::{AtomError, AtomResult};
pub use index::{Index, IndexStrategy, RowId, StrategyKind};
pub use query::{QueryRouter, StatementKind};
pub use storage::{BackendKind, StorageBackend, StorageEngine};
pub use transaction::{TransactionData, TransactionManager, TransactionState};
