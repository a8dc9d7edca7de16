//! Player identity as produced by the directory reader.

use std::fmt;

use rusqlite::types::{ToSql, ToSqlOutput};
use serde::{Deserialize, Serialize};

/// Stable key of a player row. Which form is used depends on the schema variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKey {
    /// Integer primary key (`Characters.Id`).
    RowId(i64),
    /// External platform id (steam id), stored as text.
    PlatformId(String),
}

impl PlayerKey {
    pub fn is_row_id(&self) -> bool {
        matches!(self, Self::RowId(_))
    }

    pub fn is_platform_id(&self) -> bool {
        matches!(self, Self::PlatformId(_))
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowId(id) => write!(f, "{id}"),
            Self::PlatformId(id) => f.write_str(id),
        }
    }
}

impl ToSql for PlayerKey {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::RowId(id) => Ok(ToSqlOutput::from(*id)),
            Self::PlatformId(id) => Ok(ToSqlOutput::from(id.as_str())),
        }
    }
}

/// A player as listed by the directory. Never mutated by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub key: PlayerKey,
    pub name: String,
}

impl PlayerIdentity {
    /// Build an identity, falling back to `Player <key>` when the stored name is NULL.
    pub fn new(key: PlayerKey, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| format!("Player {key}"));
        Self { key, name }
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
