pub mod json_backend;
pub mod memory;

use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Durable key-value slot that holds serialized ledger snapshots.
pub trait SnapshotStore: Send + Sync {
    /// Returns the raw value stored under `key`, or `None` when the slot is empty.
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
