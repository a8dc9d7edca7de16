//! Database connection configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the save database lives and how the connection is opened.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the save database. Default: `scum.db`.
    pub path: Option<String>,
    /// Check at open time that every table of the detected layout exists. Default: true.
    pub verify_layout: Option<bool>,
    /// SQLite busy timeout in milliseconds. Default: 5000.
    pub busy_timeout_ms: Option<u64>,
}

impl DatabaseConfig {
    pub fn effective_path(&self) -> PathBuf {
        PathBuf::from(self.path.as_deref().unwrap_or("scum.db"))
    }

    pub fn effective_verify_layout(&self) -> bool {
        self.verify_layout.unwrap_or(true)
    }

    pub fn effective_busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms.unwrap_or(5000))
    }
}
