//! Write path: canonical `PlayerAttributes` → one transaction over five tables.
//!
//! Sequence: backup, begin, economy, metabolism, body, rest, injury, commit.
//! A backup error aborts before the transaction opens. A statement error rolls
//! the whole transaction back before it is returned, so the connection is in
//! autocommit mode again on every exit path.

use std::path::Path;

use rusqlite::{params, Connection, Transaction};
use scumdb_core::{
    IBackupGuard, PlayerAttributes, PlayerKey, RawPlayerColumns, SaveEditError, SaveEditResult,
    SchemaVariant,
};
use tracing::{debug, info, warn};

use crate::layout::{layout_for, SchemaLayout};
use crate::mapper::ensure_key_kind;

/// Back up `db_path` (if any), then write `attrs` for `key` atomically.
pub fn save_attributes(
    conn: &mut Connection,
    variant: SchemaVariant,
    key: &PlayerKey,
    attrs: &PlayerAttributes,
    guard: &dyn IBackupGuard,
    db_path: Option<&Path>,
) -> SaveEditResult<()> {
    let layout = layout_for(variant);
    ensure_key_kind(layout, key)?;

    if let Some(path) = db_path {
        guard.backup(path)?;
    }

    let columns = RawPlayerColumns::decompose(attrs);
    let tx = conn.transaction()?;
    match apply_updates(&tx, layout, key, &columns) {
        Ok(()) => {
            tx.commit().map_err(|source| SaveEditError::TransactionFailure {
                statement: "commit",
                source,
            })?;
            info!(variant = %variant, key = %key, "Player attributes saved");
            Ok(())
        }
        Err(e) => {
            warn!(variant = %variant, key = %key, error = %e, "Save failed, rolling back");
            if let Err(rb) = tx.rollback() {
                warn!(error = %rb, "Rollback failed");
            }
            Err(e)
        }
    }
}

/// Issue the five updates in order. The economy row must exist.
fn apply_updates(
    tx: &Transaction<'_>,
    layout: &SchemaLayout,
    key: &PlayerKey,
    c: &RawPlayerColumns,
) -> SaveEditResult<()> {
    let e = &layout.economy;
    let updated = run(
        tx,
        "economy",
        &format!(
            "UPDATE {} SET {} = ?1, {} = ?2, {} = ?3 WHERE {} = ?4",
            e.table, e.fame_points, e.money, e.gold, e.key
        ),
        params![c.economy.fame_points, c.economy.money, c.economy.gold, key],
    )?;
    if updated == 0 {
        return Err(SaveEditError::not_found(key, e.table));
    }

    let m = &layout.metabolism;
    run(
        tx,
        "metabolism",
        &format!(
            "UPDATE {} SET {} = ?1, {} = ?2, {} = ?3, {} = ?4 WHERE {} = ?5",
            m.table,
            m.strength_level,
            m.constitution_level,
            m.dexterity_level,
            m.intelligence_level,
            m.key
        ),
        params![
            c.strength_level,
            c.constitution_level,
            c.dexterity_level,
            c.intelligence_level,
            key
        ],
    )?;

    let b = &layout.body;
    run(
        tx,
        "body",
        &format!("UPDATE {} SET {} = ?1 WHERE {} = ?2", b.table, b.muscle_mass, b.key),
        params![c.muscle_mass, key],
    )?;

    let r = &layout.rest;
    run(
        tx,
        "rest",
        &format!("UPDATE {} SET {} = ?1 WHERE {} = ?2", r.table, r.rest_quality, r.key),
        params![c.rest_quality, key],
    )?;

    let i = &layout.injury;
    run(
        tx,
        "injury",
        &format!(
            "UPDATE {} SET {} = ?1, {} = ?2 WHERE {} = ?3",
            i.table, i.damage, i.head_damage, i.key
        ),
        params![c.injury_damage, c.head_damage, key],
    )?;

    Ok(())
}

fn run(
    tx: &Transaction<'_>,
    statement: &'static str,
    sql: &str,
    params: impl rusqlite::Params,
) -> SaveEditResult<usize> {
    let rows = tx
        .execute(sql, params)
        .map_err(|source| SaveEditError::TransactionFailure { statement, source })?;
    debug!(statement, rows, "update applied");
    Ok(rows)
}
