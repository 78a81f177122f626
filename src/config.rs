//! Configuration management and validation
//!
//! Provides the layered configuration for the recorder: built-in defaults,
//! an optional TOML config file, then CLI argument overrides applied by the
//! command layer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{APP_DIR_NAME, CONFIG_FILENAME, DEFAULT_DATABASE_FILENAME, DEFAULT_QUERY_LIMIT};
use crate::{Error, Result};

/// Complete recorder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database location settings
    pub database: DatabaseConfig,

    /// Query behaviour settings
    pub query: QueryConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Database location settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file
    pub path: PathBuf,
}

/// Query behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Cap applied to lookups that carry no explicit limit
    pub default_limit: usize,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no `-v`/`-q` flag overrides it
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            query: QueryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_QUERY_LIMIT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default config file location (`~/.config/lidar-recorder/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILENAME))
            .ok_or_else(|| Error::configuration("cannot determine platform config directory"))
    }

    /// Load configuration from an optional TOML file over the defaults
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::configuration(format!(
                        "failed to read config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                toml::from_str(&content).map_err(|e| {
                    Error::configuration(format!(
                        "invalid config file '{}': {}",
                        path.display(),
                        e
                    ))
                })
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.query.default_limit == 0 {
            return Err(Error::configuration(
                "query default_limit must be greater than 0",
            ));
        }
        if self.database.path.as_os_str().is_empty() {
            return Err(Error::configuration("database path must not be empty"));
        }
        Ok(())
    }

    /// Create the database file's parent directory if it does not exist
    pub fn ensure_database_directory(&self) -> Result<()> {
        if let Some(parent) = self.database.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::configuration(format!(
                        "failed to create database directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        Ok(())
    }
}

/// Default database location inside the platform data directory, falling
/// back to the working directory when no data directory is available
fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DATABASE_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.query.default_limit, DEFAULT_QUERY_LIMIT);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.query.default_limit, DEFAULT_QUERY_LIMIT);
    }

    #[test]
    fn test_load_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[query]\ndefault_limit = 25").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.query.default_limit, 25);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "query = {{ default_limit = ").unwrap();

        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut config = Config::default();
        config.query.default_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ensure_database_directory_creates_parent() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut config = Config::default();
        config.database.path = temp_dir.path().join("nested").join("db.sqlite3");

        config.ensure_database_directory().unwrap();
        assert!(temp_dir.path().join("nested").exists());
    }
}
