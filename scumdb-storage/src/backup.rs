//! Hot backup taken before every guarded write.
//!
//! The copy lands next to the database as `<db>.<YYYYMMDDHHMMSS>.bak`, local
//! time. It is never written over an existing file. Two backups in the same
//! second either get a `-<n>` suffix or fail, depending on `disambiguate`.
//!
//! Pages are copied with the SQLite online backup API from a fresh read-only
//! connection, so commits still sitting in a `-wal` sidecar are included.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use rusqlite::backup::Backup;
use rusqlite::{Connection, OpenFlags};
use scumdb_core::config::BackupConfig;
use scumdb_core::{IBackupGuard, SaveEditError, SaveEditResult};
use tracing::{info, warn};

/// Timestamp layout used in backup file names.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Upper bound on `-<n>` suffixes tried for one timestamp.
const MAX_DISAMBIGUATION: u32 = 999;

/// Pages copied per backup step.
const PAGES_PER_STEP: std::os::raw::c_int = 1000;

/// Copies the database to a timestamped sibling.
#[derive(Debug, Clone)]
pub struct FileCopyBackup {
    disambiguate: bool,
    fixed_time: Option<NaiveDateTime>,
}

impl Default for FileCopyBackup {
    fn default() -> Self {
        Self {
            disambiguate: true,
            fixed_time: None,
        }
    }
}

impl FileCopyBackup {
    pub fn new(config: &BackupConfig) -> Self {
        Self {
            disambiguate: config.effective_disambiguate(),
            fixed_time: None,
        }
    }

    /// Stamp every backup with `at` instead of the local clock.
    pub fn with_fixed_time(mut self, at: NaiveDateTime) -> Self {
        self.fixed_time = Some(at);
        self
    }

    /// Back up `source` as if the current local time were `at`.
    pub fn backup_at(&self, source: &Path, at: NaiveDateTime) -> SaveEditResult<Option<PathBuf>> {
        if !source.exists() {
            return Ok(None);
        }

        let stamp = at.format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut attempt = 0;
        loop {
            let target = backup_path(source, &stamp, attempt);
            match copy_new(source, &target) {
                Ok(bytes) => {
                    info!(
                        source = %source.display(),
                        backup = %target.display(),
                        bytes,
                        "Backup created"
                    );
                    return Ok(Some(target));
                }
                Err(e)
                    if e.kind() == io::ErrorKind::AlreadyExists
                        && self.disambiguate
                        && attempt < MAX_DISAMBIGUATION =>
                {
                    attempt += 1;
                }
                Err(e) => {
                    warn!(backup = %target.display(), error = %e, "Backup failed");
                    return Err(SaveEditError::BackupFailed {
                        path: target,
                        source: e,
                    });
                }
            }
        }
    }
}

impl IBackupGuard for FileCopyBackup {
    fn backup(&self, source: &Path) -> SaveEditResult<Option<PathBuf>> {
        let at = self.fixed_time.unwrap_or_else(|| Local::now().naive_local());
        self.backup_at(source, at)
    }
}

/// `<source>.<stamp>.bak`, or `<source>.<stamp>-<n>.bak` for `n > 0`.
pub fn backup_path(source: &Path, stamp: &str, n: u32) -> PathBuf {
    let mut name = source.as_os_str().to_owned();
    if n == 0 {
        name.push(format!(".{stamp}.bak"));
    } else {
        name.push(format!(".{stamp}-{n}.bak"));
    }
    PathBuf::from(name)
}

/// Copy into a file that must not exist yet, keeping permissions and mtime.
fn copy_new(source: &Path, target: &Path) -> io::Result<u64> {
    let meta = fs::metadata(source)?;
    // Claim the name first; an existing backup is never replaced.
    OpenOptions::new().write(true).create_new(true).open(target)?;

    let result = online_backup(source, target).and_then(|()| {
        let dst = OpenOptions::new().write(true).open(target)?;
        dst.sync_all()?;
        dst.set_modified(meta.modified()?)?;
        dst.set_permissions(meta.permissions())?;
        Ok(dst.metadata()?.len())
    });

    if result.is_err() {
        let _ = fs::remove_file(target);
    }
    result
}

fn online_backup(source: &Path, target: &Path) -> io::Result<()> {
    let run = || -> rusqlite::Result<()> {
        let src = Connection::open_with_flags(source, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let mut dst = Connection::open(target)?;
        let backup = Backup::new(&src, &mut dst)?;
        backup.run_to_completion(PAGES_PER_STEP, Duration::from_millis(10), None)
    };
    run().map_err(io::Error::other)
}
