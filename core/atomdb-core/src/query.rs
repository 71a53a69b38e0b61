//! Query routing — classifies statement text and forwards it.
//!
//! Classification is deliberately naive: case-sensitive substring presence
//! of `SELECT` vs `INSERT`, first match wins, anything else is silently
//! ignored. This layer is a thin dispatcher; it never parses SQL.

use crate::error::AtomResult;
use crate::storage::StorageEngine;
use crate::transaction::TransactionManager;
use std::sync::Arc;
use tracing::debug;

/// Coarse statement classification used by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Read — forwarded to `retrieve_data`
    Select,
    /// Write — stored directly or buffered into the active transaction
    Insert,
    /// Unrecognized — ignored
    Other,
}

/// Classify a statement by substring presence, `SELECT` first.
pub fn classify(statement: &str) -> StatementKind {
    if statement.contains("SELECT") {
        StatementKind::Select
    } else if statement.contains("INSERT") {
        StatementKind::Insert
    } else {
        StatementKind::Other
    }
}

/// Thin dispatcher between raw statement text and the storage engine.
pub struct QueryRouter {
    engine: Arc<StorageEngine>,
}

impl QueryRouter {
    /// Create a router over the session's storage engine.
    pub fn new(engine: Arc<StorageEngine>) -> Self {
        Self { engine }
    }

    /// Route one statement.
    ///
    /// Reads return the full record sequence. Writes go to the active
    /// transaction's buffer when one exists and straight to the engine
    /// otherwise. Unrecognized statements return an empty result.
    pub fn route(
        &self,
        statement: &str,
        txn: &mut TransactionManager,
    ) -> AtomResult<Vec<String>> {
        match classify(statement) {
            StatementKind::Select => Ok(self.engine.retrieve_data()),
            StatementKind::Insert => {
                if txn.is_active() {
                    txn.buffer_change(statement)?;
                } else {
                    self.engine.store_data(statement);
                }
                Ok(Vec::new())
            }
            StatementKind::Other => {
                debug!(statement, "unrecognized statement ignored");
                Ok(Vec::new())
            }
        }
    }
}
