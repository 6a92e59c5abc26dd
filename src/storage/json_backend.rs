use std::path::PathBuf;

use crate::{
    core::utils::{app_data_dir, snapshot_dir_in},
    utils::persistence::{ensure_dir, read_if_exists, write_atomic},
};

use super::{Result, SnapshotStore};

const SNAPSHOT_EXTENSION: &str = "json";

/// Filesystem-backed snapshot slots: one JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(|| snapshot_dir_in(&app_data_dir()));
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), SNAPSHOT_EXTENSION))
    }
}

impl SnapshotStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        read_if_exists(&self.slot_path(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        write_atomic(&path, value)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "snapshot written");
        Ok(())
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "snapshot".into()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonFileStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonFileStore::new(Some(temp.path().join("slots"))).expect("json store");
        (store, temp)
    }

    #[test]
    fn write_and_read_roundtrip() {
        let (store, _guard) = store_with_temp_dir();
        store.write("transactions", "[]").expect("write slot");
        assert_eq!(store.read("transactions").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn empty_slot_reads_as_none() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.read("transactions").unwrap().is_none());
    }

    #[test]
    fn second_write_replaces_slot_contents() {
        let (store, _guard) = store_with_temp_dir();
        store.write("transactions", "[]").unwrap();
        store.write("transactions", "[1]").unwrap();
        assert_eq!(store.read("transactions").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn keys_are_sanitized_into_file_names() {
        let (store, _guard) = store_with_temp_dir();
        let path = store.slot_path("My Ledger/2025");
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("my_ledger_2025.json")
        );
        assert_eq!(
            store.slot_path("  ").file_name().and_then(|name| name.to_str()),
            Some("snapshot.json")
        );
    }
}
