//! Transaction Manager — the {Active, Committed, Aborted} state machine.
//!
//! Transitions follow a two-step protocol: the caller sets the target state,
//! then runs its handler. The Active handler allocates the pending-change
//! buffer, the Committed handler replays it into the storage engine in
//! recorded order, and the Aborted handler discards it without touching the
//! engine.

use crate::error::{AtomError, AtomResult};
use crate::storage::StorageEngine;
use crate::transaction::TransactionData;
use std::sync::Arc;
use tracing::{debug, info};

/// Lifecycle state of the current transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// Writes are being buffered
    Active,
    /// Buffered writes have been replayed (terminal)
    Committed,
    /// Buffered writes have been discarded (terminal)
    Aborted,
}

/// Drives the transaction state machine over the session's storage engine.
///
/// The manager starts with no current state; handling operations before
/// [`start`](Self::start) fail with
/// [`AtomError::NoActiveTransaction`]. It holds a non-owning handle to the
/// engine and never constructs or destroys it. At most one transaction is
/// active at a time — this is a single-writer kernel, so the "resource lock"
/// taken on activation is logged intent, not a mutex.
pub struct TransactionManager {
    engine: Arc<StorageEngine>,
    state: Option<TransactionState>,
    pending: Option<TransactionData>,
}

impl TransactionManager {
    /// Create a manager over the session's storage engine.
    pub fn new(engine: Arc<StorageEngine>) -> Self {
        Self {
            engine,
            state: None,
            pending: None,
        }
    }

    /// Current state, or `None` if no transaction has ever been started.
    pub fn state(&self) -> Option<TransactionState> {
        self.state
    }

    /// Whether a transaction is currently active.
    pub fn is_active(&self) -> bool {
        self.state == Some(TransactionState::Active)
    }

    /// Number of changes buffered by the active transaction.
    pub fn pending_changes(&self) -> usize {
        self.pending.as_ref().map(TransactionData::len).unwrap_or(0)
    }

    /// Begin a transaction: enter `Active` and allocate the change buffer.
    ///
    /// Fails with [`AtomError::TransactionAlreadyActive`] if one is already
    /// running; the session layer downgrades that to a warning.
    pub fn start(&mut self) -> AtomResult<()> {
        if self.is_active() {
            return Err(AtomError::TransactionAlreadyActive);
        }
        self.set_state(TransactionState::Active);
        self.handle_transaction()
    }

    /// Buffer a write issued while the transaction is active.
    ///
    /// The change is not applied to the storage engine until an explicit
    /// [`commit`](Self::commit).
    pub fn buffer_change(&mut self, change: &str) -> AtomResult<()> {
        if !self.is_active() {
            return Err(AtomError::NoActiveTransaction);
        }
        // The Active handler allocated the buffer, so it is present whenever
        // the state is Active.
        if let Some(pending) = self.pending.as_mut() {
            pending.add_change(change);
        }
        debug!(change, "change buffered");
        Ok(())
    }

    /// Commit: enter `Committed` and replay the buffered changes into the
    /// storage engine in recorded order.
    pub fn commit(&mut self) -> AtomResult<()> {
        if !self.is_active() {
            return Err(AtomError::NoActiveTransaction);
        }
        self.set_state(TransactionState::Committed);
        self.handle_transaction()
    }

    /// Roll back: enter `Aborted` and discard the buffered changes.
    ///
    /// The storage engine is never touched; the discard itself cannot fail.
    pub fn rollback(&mut self) -> AtomResult<()> {
        if !self.is_active() {
            return Err(AtomError::NoActiveTransaction);
        }
        self.set_state(TransactionState::Aborted);
        self.handle_transaction()
    }

    /// First half of the transition protocol: set the target state.
    fn set_state(&mut self, state: TransactionState) {
        debug!(?state, "transaction state set");
        self.state = Some(state);
    }

    /// Second half of the transition protocol: run the current state's
    /// handler and its side effects.
    fn handle_transaction(&mut self) -> AtomResult<()> {
        match self.state {
            None => Err(AtomError::NoActiveTransaction),
            Some(TransactionState::Active) => {
                info!("transaction active; locking resources and tracking changes");
                self.pending = Some(TransactionData::new());
                Ok(())
            }
            Some(TransactionState::Committed) => {
                let data = self.pending.take().unwrap_or_default();
                info!(changes = data.len(), "transaction committed; applying changes");
                for change in data.into_changes() {
                    self.engine.store_data(&change);
                }
                info!("releasing locks after commit");
                Ok(())
            }
            Some(TransactionState::Aborted) => {
                let discarded = self.pending.take().unwrap_or_default();
                info!(discarded = discarded.len(), "transaction aborted; rolling back changes");
                info!("releasing locks after abort");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_manager() -> (Arc<StorageEngine>, TransactionManager) {
        let engine = Arc::new(StorageEngine::new("memory").unwrap());
        let manager = TransactionManager::new(Arc::clone(&engine));
        (engine, manager)
    }

    #[test]
    fn test_starts_with_no_state() {
        let (_, manager) = memory_manager();
        assert_eq!(manager.state(), None);
        assert!(!manager.is_active());
    }

    #[test]
    fn test_commit_replays_in_order() {
        let (engine, mut manager) = memory_manager();
        manager.start().unwrap();
        manager.buffer_change("c1").unwrap();
        manager.buffer_change("c2").unwrap();

        // Buffered writes are invisible until commit.
        assert!(engine.retrieve_data().is_empty());
        assert_eq!(manager.pending_changes(), 2);

        manager.commit().unwrap();
        assert_eq!(manager.state(), Some(TransactionState::Committed));
        assert_eq!(engine.retrieve_data(), vec!["c1", "c2"]);
        assert_eq!(manager.pending_changes(), 0);
    }

    #[test]
    fn test_rollback_discards_without_touching_engine() {
        let (engine, mut manager) = memory_manager();
        engine.store_data("before");

        manager.start().unwrap();
        manager.buffer_change("discarded").unwrap();
        manager.rollback().unwrap();

        assert_eq!(manager.state(), Some(TransactionState::Aborted));
        assert_eq!(engine.retrieve_data(), vec!["before"]);
        assert_eq!(manager.pending_changes(), 0);
    }

    #[test]
    fn test_commit_without_start_fails() {
        let (engine, mut manager) = memory_manager();
        engine.store_data("kept");

        let err = manager.commit().unwrap_err();
        assert!(matches!(err, AtomError::NoActiveTransaction));
        assert_eq!(engine.retrieve_data(), vec!["kept"]);
    }

    #[test]
    fn test_rollback_without_start_fails() {
        let (_, mut manager) = memory_manager();
        assert!(matches!(
            manager.rollback().unwrap_err(),
            AtomError::NoActiveTransaction
        ));
    }

    #[test]
    fn test_buffer_change_without_start_fails() {
        let (_, mut manager) = memory_manager();
        assert!(matches!(
            manager.buffer_change("c").unwrap_err(),
            AtomError::NoActiveTransaction
        ));
    }

    #[test]
    fn test_committed_state_is_terminal() {
        let (_, mut manager) = memory_manager();
        manager.start().unwrap();
        manager.commit().unwrap();

        assert!(matches!(
            manager.commit().unwrap_err(),
            AtomError::NoActiveTransaction
        ));
        assert!(matches!(
            manager.rollback().unwrap_err(),
            AtomError::NoActiveTransaction
        ));
    }

    #[test]
    fn test_start_while_active_fails() {
        let (_, mut manager) = memory_manager();
        manager.start().unwrap();

        assert!(matches!(
            manager.start().unwrap_err(),
            AtomError::TransactionAlreadyActive
        ));
        // The running transaction is untouched.
        assert!(manager.is_active());
    }

    #[test]
    fn test_new_transaction_after_terminal_state() {
        let (engine, mut manager) = memory_manager();
        manager.start().unwrap();
        manager.rollback().unwrap();

        manager.start().unwrap();
        manager.buffer_change("second try").unwrap();
        manager.commit().unwrap();

        assert_eq!(engine.retrieve_data(), vec!["second try"]);
    }
}
