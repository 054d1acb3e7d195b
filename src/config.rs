use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

mod layout_config;
mod storage_config;

pub use layout_config::LayoutConfig;
pub use storage_config::StorageConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Global application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Get the config file path (config.json in the config directory)
    pub fn path() -> PathBuf {
        const FILENAME: &str = "config.json";
        if let Some(mut path) = dirs::config_dir() {
            path.push("teomanager");
            path.push(FILENAME);
            return path;
        }

        if let Some(mut path) = dirs::home_dir() {
            path.push(".teomanager");
            path.push(FILENAME);
            return path;
        }

        PathBuf::from(FILENAME)
    }

    /// Load config from `path`, falling back to defaults
    ///
    /// A missing file is not an error. An unreadable or invalid file is
    /// logged and ignored.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(config)) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Using default config");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::layout_config::{DEFAULT_RESIZE_DEBOUNCE_MS, DEFAULT_TRANSITION_RESTORE_MS};
    use super::storage_config::DEFAULT_STORAGE_KEY;
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.layout.mobile_breakpoint, 1024.0);
        assert_eq!(config.layout.resize_debounce(), Duration::from_millis(100));
        assert_eq!(config.layout.transition_restore(), Duration::from_millis(50));
        assert_eq!(config.layout.window_width, 1280);
        assert_eq!(config.layout.window_height, 800);
        assert_eq!(config.storage.key, "teomanager_sidebar_state");
        assert_eq!(config.storage.path, None);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let parsed: Config =
            serde_json::from_str(r#"{ "layout": { "mobileBreakpoint": 768 } }"#).unwrap();

        assert_eq!(parsed.layout.mobile_breakpoint, 768.0);
        assert_eq!(parsed.layout.resize_debounce_ms, DEFAULT_RESIZE_DEBOUNCE_MS);
        assert_eq!(
            parsed.layout.transition_restore_ms,
            DEFAULT_TRANSITION_RESTORE_MS
        );
        assert_eq!(parsed.storage.key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "storage": { "key": "custom_key", "path": "/tmp/storage.json" } }"#,
        )
        .unwrap();

        let config = Config::load(&path);
        assert_eq!(config.storage.key, "custom_key");
        assert_eq!(
            config.storage.path,
            Some(PathBuf::from("/tmp/storage.json"))
        );
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_storage_file_path_prefers_override() {
        let mut storage = StorageConfig::default();
        assert!(storage.file_path().ends_with("local_storage.json"));

        storage.path = Some(PathBuf::from("/srv/layout.json"));
        assert_eq!(storage.file_path(), PathBuf::from("/srv/layout.json"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("absent.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "layout = 1").unwrap();

        assert!(matches!(
            Config::read(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(Config::load(&path), Config::default());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = Config::default();
        config.layout.resize_debounce_ms = 250;
        config.storage.path = Some(PathBuf::from("/data/storage.json"));

        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("resizeDebounceMs"));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
