//! Player directory: one listing query per schema variant.

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};
use scumdb_core::{PlayerIdentity, PlayerKey, SaveEditResult, SchemaVariant};
use tracing::debug;

use crate::layout::{layout_for, KeyKind, SchemaLayout};

/// List every player of the database, in the variant's natural order.
pub fn list_players(conn: &Connection, variant: SchemaVariant) -> SaveEditResult<Vec<PlayerIdentity>> {
    let players = query_directory(conn, layout_for(variant))?;
    debug!(variant = %variant, count = players.len(), "listed players");
    Ok(players)
}

fn query_directory(conn: &Connection, layout: &SchemaLayout) -> SaveEditResult<Vec<PlayerIdentity>> {
    let dir = &layout.directory;
    let sql = format!("SELECT {}, {} FROM {}", dir.key, dir.name, dir.table);

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt
        .query_map([], |row| {
            let key = read_key(row, 0, layout.key_kind)?;
            let name: Option<String> = row.get(1)?;
            Ok(PlayerIdentity::new(key, name))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    // Sort on the displayed name so NULL names fall in with their `Player <key>` fallback.
    if dir.order_by_name {
        rows.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(rows)
}

/// Read a key column. Platform ids are accepted as text or integer.
fn read_key(row: &Row<'_>, idx: usize, kind: KeyKind) -> rusqlite::Result<PlayerKey> {
    match kind {
        KeyKind::RowId => Ok(PlayerKey::RowId(row.get(idx)?)),
        KeyKind::PlatformId => match row.get_ref(idx)? {
            ValueRef::Integer(i) => Ok(PlayerKey::PlatformId(i.to_string())),
            ValueRef::Text(t) => Ok(PlayerKey::PlatformId(String::from_utf8_lossy(t).into_owned())),
            other => Err(rusqlite::Error::InvalidColumnType(
                idx,
                "platform id".to_string(),
                other.data_type(),
            )),
        },
    }
}
