//! Read path: stored columns → canonical `PlayerAttributes`.
//!
//! The identity and economy rows are required; their absence is `NotFound`.
//! Base levels and modifiers are each read by an independent single-column
//! lookup, and a missing row or NULL there reads as 0.

use rusqlite::{Connection, OptionalExtension};
use scumdb_core::{
    EconomyRecord, PlayerAttributes, PlayerKey, RawPlayerColumns, SaveEditError, SaveEditResult,
    SchemaVariant,
};
use tracing::debug;

use crate::layout::{layout_for, SchemaLayout};

/// Load the canonical attributes of one player.
pub fn load_attributes(
    conn: &Connection,
    variant: SchemaVariant,
    key: &PlayerKey,
) -> SaveEditResult<PlayerAttributes> {
    let raw = read_raw_columns(conn, layout_for(variant), key)?;
    let attrs = PlayerAttributes::derive(&raw);
    debug!(variant = %variant, key = %key, "loaded player attributes");
    Ok(attrs)
}

/// Read every stored column behind the canonical record, without deriving.
pub fn read_raw_columns(
    conn: &Connection,
    layout: &SchemaLayout,
    key: &PlayerKey,
) -> SaveEditResult<RawPlayerColumns> {
    ensure_key_kind(layout, key)?;
    ensure_identity(conn, layout, key)?;
    let economy = read_economy(conn, layout, key)?;

    let m = &layout.metabolism;
    Ok(RawPlayerColumns {
        economy,
        strength_level: lookup_or_zero(conn, m.table, m.key, m.strength_level, key)?,
        constitution_level: lookup_or_zero(conn, m.table, m.key, m.constitution_level, key)?,
        dexterity_level: lookup_or_zero(conn, m.table, m.key, m.dexterity_level, key)?,
        intelligence_level: lookup_or_zero(conn, m.table, m.key, m.intelligence_level, key)?,
        muscle_mass: lookup_or_zero(
            conn,
            layout.body.table,
            layout.body.key,
            layout.body.muscle_mass,
            key,
        )?,
        injury_damage: lookup_or_zero(
            conn,
            layout.injury.table,
            layout.injury.key,
            layout.injury.damage,
            key,
        )?,
        rest_quality: lookup_or_zero(
            conn,
            layout.rest.table,
            layout.rest.key,
            layout.rest.rest_quality,
            key,
        )?,
        head_damage: lookup_or_zero(
            conn,
            layout.injury.table,
            layout.injury.key,
            layout.injury.head_damage,
            key,
        )?,
    })
}

/// A key of the wrong form can never name a row of this layout.
pub(crate) fn ensure_key_kind(layout: &SchemaLayout, key: &PlayerKey) -> SaveEditResult<()> {
    if layout.key_kind.matches(key) {
        Ok(())
    } else {
        Err(SaveEditError::not_found(key, layout.directory.table))
    }
}

fn ensure_identity(conn: &Connection, layout: &SchemaLayout, key: &PlayerKey) -> SaveEditResult<()> {
    let dir = &layout.directory;
    let sql = format!("SELECT 1 FROM {} WHERE {} = ?1 LIMIT 1", dir.table, dir.key);
    let found = conn
        .query_row(&sql, [key], |_| Ok(()))
        .optional()?
        .is_some();
    if found {
        Ok(())
    } else {
        Err(SaveEditError::not_found(key, dir.table))
    }
}

fn read_economy(conn: &Connection, layout: &SchemaLayout, key: &PlayerKey) -> SaveEditResult<EconomyRecord> {
    let e = &layout.economy;
    let sql = format!(
        "SELECT {}, {}, {} FROM {} WHERE {} = ?1 LIMIT 1",
        e.fame_points, e.money, e.gold, e.table, e.key
    );
    conn.query_row(&sql, [key], |row| {
        Ok(EconomyRecord {
            fame_points: row.get::<_, Option<i64>>(0)?.unwrap_or(0),
            money: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
            gold: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
        })
    })
    .optional()?
    .ok_or_else(|| SaveEditError::not_found(key, e.table))
}

/// Single-column lookup keyed by player. Absent row or NULL → 0.
fn lookup_or_zero(
    conn: &Connection,
    table: &str,
    key_column: &str,
    column: &str,
    key: &PlayerKey,
) -> SaveEditResult<i64> {
    let sql = format!("SELECT {column} FROM {table} WHERE {key_column} = ?1 LIMIT 1");
    let value = conn
        .query_row(&sql, [key], |row| row.get::<_, Option<i64>>(0))
        .optional()?
        .flatten()
        .unwrap_or(0);
    Ok(value)
}
