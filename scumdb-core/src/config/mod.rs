pub mod backup_config;
pub mod database_config;
pub mod logging_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{SaveEditError, SaveEditResult};

pub use backup_config::BackupConfig;
pub use database_config::DatabaseConfig;
pub use logging_config::LoggingConfig;

/// Top-level editor configuration, normally read from `scumdb.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    pub database: DatabaseConfig,
    pub backup: BackupConfig,
    pub logging: LoggingConfig,
}

impl EditorConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> SaveEditResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SaveEditError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(Self::from_toml(&content)?)
    }

    /// Config pointing at a specific database file, everything else default.
    pub fn for_database(path: impl Into<String>) -> Self {
        Self {
            database: DatabaseConfig {
                path: Some(path.into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
