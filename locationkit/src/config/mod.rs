//! Configuration file handling.
//!
//! Settings live in `~/.locationkit/config.ini`:
//!
//! ```ini
//! [client]
//! region = us-east-1
//! endpoint =
//! api_key =
//! timeout_secs = 30
//!
//! [retry]
//! max_attempts = 3
//! ```
//!
//! Missing keys fall back to defaults; empty values mean "not set".

mod keys;

pub use keys::ConfigKey;

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;
use tracing::debug;

use crate::client::{DEFAULT_MAX_ATTEMPTS, DEFAULT_REGION, DEFAULT_TIMEOUT_SECS};

/// Directory under the home directory holding the config file.
pub const CONFIG_DIR_NAME: &str = ".locationkit";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.ini";

pub const ENV_REGION: &str = "LOCATIONKIT_REGION";
pub const ENV_API_KEY: &str = "LOCATIONKIT_API_KEY";
pub const ENV_ENDPOINT: &str = "LOCATIONKIT_ENDPOINT";

/// Errors from loading, saving or editing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),
}

/// `[client]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub region: String,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `[retry]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrySettings {
    pub max_attempts: u32,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub client: ClientSettings,
    pub retry: RetrySettings,
}

/// Path of the user's config file.
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

/// Directory holding the config file.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

impl ConfigFile {
    /// Loads the user's config file, or defaults if it does not exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file_path();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(io) => ConfigError::Io(io),
            ini::Error::Parse(parse) => ConfigError::Parse {
                path: path.to_path_buf(),
                message: parse.to_string(),
            },
        })?;

        let mut config = Self::default();
        for key in ConfigKey::all() {
            let value = ini
                .section(Some(key.section()))
                .and_then(|section| section.get(key.key_name()));
            if let Some(value) = value {
                key.set(&mut config, value)?;
            }
        }

        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Saves to the user's config file.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Saves to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            ini.with_section(Some(key.section()))
                .set(key.key_name(), key.get(self));
        }
        ini.write_to_file(path)?;

        debug!(path = %path.display(), "Saved config file");
        Ok(())
    }

    /// Applies `LOCATIONKIT_REGION`, `LOCATIONKIT_API_KEY` and
    /// `LOCATIONKIT_ENDPOINT` on top of the file values.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Applies overrides from any variable source. Empty values are ignored.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(region) = lookup(ENV_REGION) {
            self.client.region = region;
        }
        if let Some(api_key) = lookup(ENV_API_KEY) {
            self.client.api_key = Some(api_key);
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.client.endpoint = Some(endpoint);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ConfigFile::default();
        assert_eq!(config.client.region, "us-east-1");
        assert_eq!(config.client.timeout_secs, 30);
        assert_eq!(config.client.api_key, None);
        assert_eq!(config.retry.max_attempts, 3);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.client.region = "eu-west-1".to_string();
        config.client.api_key = Some("v1.public.abc".to_string());
        config.client.timeout_secs = 12;
        config.retry.max_attempts = 5;
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[client]\nregion = ap-northeast-1\napi_key =\n").unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded.client.region, "ap-northeast-1");
        assert_eq!(loaded.client.api_key, None);
        assert_eq!(loaded.client.timeout_secs, 30);
        assert_eq!(loaded.retry.max_attempts, 3);
    }

    #[test]
    fn test_load_rejects_bad_number() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[client]\ntimeout_secs = soon\n").unwrap();

        let result = ConfigFile::load_from(&path);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = ConfigFile::load_from(&dir.path().join("absent.ini"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_overrides() {
        let config = ConfigFile::default().with_overrides_from(|name| match name {
            ENV_REGION => Some("sa-east-1".to_string()),
            ENV_API_KEY => Some("from-env".to_string()),
            ENV_ENDPOINT => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.client.region, "sa-east-1");
        assert_eq!(config.client.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.client.endpoint, None);
    }

    #[test]
    fn test_config_file_path_location() {
        let path = config_file_path();
        assert!(path.ends_with(".locationkit/config.ini"));
    }
}
