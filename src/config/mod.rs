use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    core::{
        ledger_store::SNAPSHOT_KEY,
        utils::{app_data_dir, config_file_in, snapshot_dir_in},
    },
    currency::CurrencyFormat,
    errors::LedgerError,
    utils::persistence::{ensure_dir, read_if_exists, write_atomic},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub currency: CurrencyFormat,
    #[serde(default = "Config::default_storage_key")]
    pub storage_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: CurrencyFormat::default(),
            storage_key: Self::default_storage_key(),
            snapshot_dir: None,
            export_dir: None,
        }
    }
}

impl Config {
    pub fn default_storage_key() -> String {
        SNAPSHOT_KEY.to_string()
    }
}

/// Loads and saves `config.json` under the application data directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    /// Reads the configuration, returning defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        match read_if_exists(&self.path)? {
            Some(data) => serde_json::from_str(&data).map_err(|err| {
                LedgerError::Config(format!("`{}` is invalid: {}", self.path.display(), err))
            }),
            None => Ok(Config::default()),
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    /// Directory that holds snapshot slots for `config`.
    pub fn snapshot_dir(&self, config: &Config) -> PathBuf {
        config
            .snapshot_dir
            .clone()
            .unwrap_or_else(|| snapshot_dir_in(&self.base))
    }

    /// Directory exports are written to; the data directory when unset.
    pub fn export_dir(&self, config: &Config) -> PathBuf {
        config
            .export_dir
            .clone()
            .unwrap_or_else(|| self.base.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::DigitGrouping;
    use tempfile::TempDir;

    fn manager() -> (ConfigManager, TempDir) {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        (manager, temp)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let (manager, _guard) = manager();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage_key, "transactions");
    }

    #[test]
    fn save_then_load_roundtrip() {
        let (manager, guard) = manager();
        let mut config = Config::default();
        config.currency.grouping = DigitGrouping::Western;
        config.export_dir = Some(guard.path().join("exports"));
        manager.save(&config).unwrap();

        assert_eq!(manager.load().unwrap(), config);
        assert_eq!(manager.export_dir(&config), guard.path().join("exports"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let (manager, guard) = manager();
        std::fs::write(manager.path(), r#"{ "storage_key": "household" }"#).unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config.storage_key, "household");
        assert_eq!(config.currency, CurrencyFormat::default());
        assert_eq!(
            manager.snapshot_dir(&config),
            guard.path().join("snapshots")
        );
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let (manager, _guard) = manager();
        std::fs::write(manager.path(), "not json").unwrap();
        assert!(matches!(manager.load(), Err(LedgerError::Config(_))));
    }
}
