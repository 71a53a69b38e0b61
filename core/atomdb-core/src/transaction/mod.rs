//! Transaction lifecycle — buffered writes applied or discarded atomically.

pub mod data;
pub mod manager;

pub use data::TransactionData;
pub use manager::{TransactionManager, TransactionState};
