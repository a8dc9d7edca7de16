//! `DatabaseManager`: owner of the single connection to the save database.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};
use scumdb_core::config::DatabaseConfig;
use scumdb_core::{SaveEditError, SaveEditResult};
use tracing::debug;

/// Holds the one connection the editor uses. Not schema-aware.
///
/// Reads borrow the connection shared through `with_reader`; writes take it
/// exclusively through `with_writer` so a transaction can be opened on it.
pub struct DatabaseManager {
    conn: Connection,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open an existing save database. A missing file is an error, never created.
    pub fn open(path: &Path, busy_timeout: Duration) -> SaveEditResult<Self> {
        if !path.exists() {
            return Err(SaveEditError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("database file {} does not exist", path.display()),
            )));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(busy_timeout)?;
        debug!(path = %path.display(), "opened save database");

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open using the `[database]` section of the editor config.
    pub fn open_with_config(config: &DatabaseConfig) -> SaveEditResult<Self> {
        Self::open(&config.effective_path(), config.effective_busy_timeout())
    }

    /// Wrap an already-open connection (in-memory databases, tests).
    pub fn from_connection(conn: Connection) -> Self {
        let path = conn
            .path()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self { conn, path }
    }

    /// Open an in-memory database (for testing). Backups are a no-op for it.
    pub fn open_in_memory() -> SaveEditResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
            path: None,
        })
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn with_reader<F, T>(&self, f: F) -> SaveEditResult<T>
    where
        F: FnOnce(&Connection) -> SaveEditResult<T>,
    {
        f(&self.conn)
    }

    pub fn with_writer<F, T>(&mut self, f: F) -> SaveEditResult<T>
    where
        F: FnOnce(&mut Connection) -> SaveEditResult<T>,
    {
        f(&mut self.conn)
    }
}
