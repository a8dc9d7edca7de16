//! `SaveEditorEngine`: the `IPlayerStore` the presentation layer talks to.
//!
//! Owns the `DatabaseManager`, the variant detected at open time and the
//! backup guard. All reads go through `with_reader()`, the write path
//! through `with_writer()`.

use rusqlite::Connection;
use scumdb_core::{
    EditorConfig, IBackupGuard, IPlayerStore, PlayerAttributes, PlayerIdentity, PlayerKey,
    SaveEditResult, SchemaVariant,
};
use tracing::info;

use crate::backup::FileCopyBackup;
use crate::connection::DatabaseManager;
use crate::{detect, directory, mapper, writer};

pub struct SaveEditorEngine {
    db: DatabaseManager,
    variant: SchemaVariant,
    guard: Box<dyn IBackupGuard>,
}

impl SaveEditorEngine {
    /// Open the configured database, detect its variant and optionally verify its layout.
    pub fn open(config: &EditorConfig) -> SaveEditResult<Self> {
        let db = DatabaseManager::open_with_config(&config.database)?;
        let guard = Box::new(FileCopyBackup::new(&config.backup));
        Self::with_guard(db, guard, config.database.effective_verify_layout())
    }

    /// Wrap an already-open connection with the default backup guard.
    pub fn from_connection(conn: Connection) -> SaveEditResult<Self> {
        Self::with_guard(
            DatabaseManager::from_connection(conn),
            Box::new(FileCopyBackup::default()),
            true,
        )
    }

    /// Build an engine around an explicit manager and guard.
    pub fn with_guard(
        db: DatabaseManager,
        guard: Box<dyn IBackupGuard>,
        verify_layout: bool,
    ) -> SaveEditResult<Self> {
        let variant = db.with_reader(|conn| {
            let tables = detect::list_tables(conn)?;
            let variant = detect::classify(&tables)?;
            if verify_layout {
                detect::verify_layout(&tables, variant)?;
            }
            Ok(variant)
        })?;

        info!(
            variant = %variant,
            path = ?db.path().map(|p| p.display().to_string()),
            "Save editor opened"
        );
        Ok(Self { db, variant, guard })
    }

    /// Underlying connection manager.
    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }
}

impl IPlayerStore for SaveEditorEngine {
    fn variant(&self) -> SchemaVariant {
        self.variant
    }

    fn list_players(&self) -> SaveEditResult<Vec<PlayerIdentity>> {
        self.db
            .with_reader(|conn| directory::list_players(conn, self.variant))
    }

    fn load_attributes(&self, key: &PlayerKey) -> SaveEditResult<PlayerAttributes> {
        self.db
            .with_reader(|conn| mapper::load_attributes(conn, self.variant, key))
    }

    fn save_attributes(&mut self, key: &PlayerKey, attrs: &PlayerAttributes) -> SaveEditResult<()> {
        let variant = self.variant;
        let guard = self.guard.as_ref();
        let path = self.db.path().map(|p| p.to_path_buf());
        self.db.with_writer(|conn| {
            writer::save_attributes(conn, variant, key, attrs, guard, path.as_deref())
        })
    }
}
