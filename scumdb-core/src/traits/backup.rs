//! Pre-write safety copy of the database file.

use std::path::{Path, PathBuf};

use crate::errors::SaveEditResult;

/// Copies the database file aside before a mutation is applied.
///
/// Implementations return `Ok(None)` when `source` does not exist, and the
/// path of the created copy otherwise. Any error must abort the write that
/// requested the backup.
pub trait IBackupGuard {
    fn backup(&self, source: &Path) -> SaveEditResult<Option<PathBuf>>;
}
