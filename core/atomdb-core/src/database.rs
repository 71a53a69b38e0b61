//! Database session — explicit construction, simulated DDL, transaction
//! delegation.
//!
//! The session owns the storage engine for its whole lifetime and shares it
//! with the query router and the transaction manager. There is no hidden
//! global state: open a session, pass it around.

use crate::error::AtomResult;
use crate::query::QueryRouter;
use crate::storage::StorageEngine;
use crate::transaction::TransactionManager;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// A database session: storage engine + query router + transaction manager.
pub struct Database {
    engine: Arc<StorageEngine>,
    router: QueryRouter,
    manager: TransactionManager,
    /// Simulated DDL: table name → definition text. Schema is not enforced.
    tables: BTreeMap<String, String>,
}

impl Database {
    /// Open a session over the given backend-kind token (`"memory"` or
    /// `"file"`). An unknown token is the only fatal error.
    pub fn open(backend_kind: &str) -> AtomResult<Self> {
        let engine = Arc::new(StorageEngine::new(backend_kind)?);
        Ok(Self::with_engine(engine))
    }

    /// Open a volatile in-memory session.
    pub fn open_in_memory() -> AtomResult<Self> {
        Self::open("memory")
    }

    /// Build a session over an already-constructed engine.
    pub fn with_engine(engine: Arc<StorageEngine>) -> Self {
        let router = QueryRouter::new(Arc::clone(&engine));
        let manager = TransactionManager::new(Arc::clone(&engine));
        Self {
            engine,
            router,
            manager,
            tables: BTreeMap::new(),
        }
    }

    /// Shared handle to the storage engine.
    pub fn engine(&self) -> &Arc<StorageEngine> {
        &self.engine
    }

    /// Record a table definition.
    ///
    /// DDL is simulated: the definition text is kept verbatim and nothing is
    /// enforced against it.
    pub fn create_table(&mut self, definition: &str) {
        let name = table_name(definition);
        info!(table = %name, "creating table");
        self.tables.insert(name, definition.to_string());
    }

    /// Names of the tables defined in this session, sorted.
    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// Insert a raw write statement: buffered while a transaction is active,
    /// stored directly otherwise.
    pub fn insert(&mut self, statement: &str) {
        if self.manager.is_active() {
            if let Err(err) = self.manager.buffer_change(statement) {
                warn!(%err, "insert dropped");
            }
        } else {
            self.engine.store_data(statement);
        }
    }

    /// Execute a statement through the query router.
    pub fn execute_query(&mut self, statement: &str) -> AtomResult<Vec<String>> {
        self.router.route(statement, &mut self.manager)
    }

    /// Begin a transaction.
    ///
    /// A re-entrant `begin` while one is already active is a reported no-op.
    pub fn begin(&mut self) {
        if let Err(err) = self.manager.start() {
            warn!(%err, "begin ignored");
        }
    }

    /// Commit the active transaction, replaying its buffered writes.
    pub fn commit(&mut self) -> AtomResult<()> {
        self.manager.commit()
    }

    /// Roll back the active transaction, discarding its buffered writes.
    pub fn rollback(&mut self) -> AtomResult<()> {
        self.manager.rollback()
    }

    /// The transaction manager, for state inspection.
    pub fn transaction(&self) -> &TransactionManager {
        &self.manager
    }
}

/// Pull the table name out of a `CREATE TABLE name (...)` definition.
/// Falls back to the whole definition text when the shape is unexpected.
fn table_name(definition: &str) -> String {
    definition
        .trim()
        .strip_prefix("CREATE TABLE")
        .map(str::trim_start)
        .and_then(|rest| rest.split(|c: char| c == '(' || c.is_whitespace()).next())
        .filter(|name| !name.is_empty())
        .unwrap_or(definition)
        .to_string()
}
