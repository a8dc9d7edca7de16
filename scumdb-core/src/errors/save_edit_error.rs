//! One error enum covering detection, reads, guarded writes and config.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SaveEditError {
    // Detection
    #[error("Unsupported schema: {detail}")]
    UnsupportedSchema { detail: String },

    // Lookup
    #[error("Player {key} not found in table {table}")]
    NotFound { key: String, table: &'static str },

    // Storage
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backup of {} failed: {source}", .path.display())]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Writes
    #[error("Transaction rolled back at {statement}: {source}")]
    TransactionFailure {
        statement: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    // Config
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Stable error codes for the presentation layer.
impl SaveEditError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedSchema { .. } => "UNSUPPORTED_SCHEMA",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Storage(_) | Self::Io(_) | Self::BackupFailed { .. } => "STORAGE_IO_ERROR",
            Self::TransactionFailure { .. } => "TRANSACTION_FAILURE",
            Self::Config(_) => "CONFIG_ERROR",
            Self::TomlParse(_) => "CONFIG_PARSE_ERROR",
        }
    }

    pub fn not_found(key: impl ToString, table: &'static str) -> Self {
        Self::NotFound {
            key: key.to_string(),
            table,
        }
    }
}

pub type SaveEditResult<T> = Result<T, SaveEditError>;
