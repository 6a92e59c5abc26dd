#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps a personal income and expense ledger mirrored to a
//! durable snapshot, and derives summaries, category breakdowns, and
//! spreadsheet exports from it.

pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use crate::core::{AddOutcome, LedgerStore};
pub use crate::errors::{LedgerError, RejectReason};
pub use crate::ledger::{Transaction, TransactionType};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense tracker tracing initialized.");
    });
}

/// Opens the ledger described by the on-disk configuration.
pub fn open_default() -> Result<(LedgerStore, config::Config), LedgerError> {
    let manager = config::ConfigManager::new()?;
    let config = manager.load()?;
    let storage = storage::JsonFileStore::new(Some(manager.snapshot_dir(&config)))?;
    let mut store = LedgerStore::with_key(Box::new(storage), config.storage_key.clone());
    store.initialize();
    Ok((store, config))
}
