//! Pre-write backup configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BackupConfig {
    /// Append `-<n>` when a backup for the same second already exists,
    /// instead of failing the write. Default: true.
    pub disambiguate: Option<bool>,
}

impl BackupConfig {
    pub fn effective_disambiguate(&self) -> bool {
        self.disambiguate.unwrap_or(true)
    }
}
