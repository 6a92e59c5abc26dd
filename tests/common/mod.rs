use std::path::{Path, PathBuf};

use expense_tracker::{storage::JsonFileStore, LedgerStore};
use tempfile::TempDir;

/// Builds a ready store over a fresh temporary directory. Keep the returned
/// guard alive for as long as the files are needed.
pub fn setup_file_store() -> (LedgerStore, PathBuf, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let dir = temp.path().join("snapshots");
    let store = reopen(&dir);
    (store, dir, temp)
}

/// Opens a second store over an existing snapshot directory, as a new
/// session would.
pub fn reopen(dir: &Path) -> LedgerStore {
    let storage = JsonFileStore::new(Some(dir.to_path_buf())).expect("create json file store");
    LedgerStore::open(Box::new(storage))
}
