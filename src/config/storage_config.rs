use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::state::FileStorage;

/// Storage key holding the sidebar state label
pub const DEFAULT_STORAGE_KEY: &str = "teomanager_sidebar_state";

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Configuration for the persisted layout preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    #[serde(default = "default_storage_key")]
    pub key: String,
    /// Storage file; the local data directory is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
            path: None,
        }
    }
}

impl StorageConfig {
    /// Storage file to use, falling back to the local data directory
    pub fn file_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(FileStorage::default_path)
    }
}
