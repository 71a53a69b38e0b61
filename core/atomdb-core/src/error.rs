//! Error types for the AtomDB storage kernel.
//!
//! All public APIs return `AtomResult<T>` — no panics in library code.

use thiserror::Error;

/// Unified error type for all AtomDB operations.
#[derive(Debug, Error)]
pub enum AtomError {
    /// The backend-kind token named no known backend.
    ///
    /// This is the only error that is fatal to construction; everything else
    /// is recovered or reported locally.
    #[error("unknown storage backend '{0}' (expected \"memory\" or \"file\")")]
    UnknownBackend(String),

    /// Standard I/O error (durable backend)
    #[error("io error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A transaction operation was invoked with no active transaction
    #[error("no active transaction")]
    NoActiveTransaction,

    /// A transaction was started while another one was already active
    #[error("a transaction is already active")]
    TransactionAlreadyActive,
}

/// Result type alias for all AtomDB operations.
pub type AtomResult<T> = Result<T, AtomError>;
