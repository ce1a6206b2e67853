//! Board configuration
//!
//! Resolves where the board keeps its state from the environment.

use std::path::PathBuf;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "TASKBOARD_DATA_DIR";
/// Environment variable naming the storage slot
pub const STORAGE_KEY_ENV: &str = "TASKBOARD_STORAGE_KEY";

const DEFAULT_DATA_DIR: &str = ".taskboard-data";
const DEFAULT_STORAGE_KEY: &str = "tasks";

/// Where and under which key the board is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Directory holding the key-value files
    pub data_dir: PathBuf,
    /// Name of the slot holding the serialized task list
    pub storage_key: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl BoardConfig {
    /// Create a config for the given data directory with the default slot
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Set the storage slot name
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Build a config from `TASKBOARD_DATA_DIR` and `TASKBOARD_STORAGE_KEY`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unset or blank values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let defaults = Self::default();
        Self {
            data_dir: value(DATA_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            storage_key: value(STORAGE_KEY_ENV).unwrap_or(defaults.storage_key),
        }
    }
}
