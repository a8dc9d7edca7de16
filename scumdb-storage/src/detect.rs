//! Schema variant detection from the table catalog.
//!
//! Variant A is checked first and wins whenever `entity` and `entity_component`
//! both exist; variant B needs a `Characters` table. There is no default.
//! SQLite identifiers are case-insensitive, so names are compared that way.

use std::collections::BTreeSet;

use rusqlite::Connection;
use scumdb_core::{SaveEditError, SaveEditResult, SchemaVariant};
use tracing::debug;

use crate::layout::layout_for;

/// Names of all tables in the catalog. Read-only.
pub fn list_tables(conn: &Connection) -> SaveEditResult<BTreeSet<String>> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
    let tables = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<BTreeSet<_>, _>>()?;
    Ok(tables)
}

fn has_table(tables: &BTreeSet<String>, name: &str) -> bool {
    tables.iter().any(|t| t.eq_ignore_ascii_case(name))
}

/// Classify a table set. Pure.
pub fn classify(tables: &BTreeSet<String>) -> SaveEditResult<SchemaVariant> {
    if has_table(tables, "entity") && has_table(tables, "entity_component") {
        return Ok(SchemaVariant::EntityComponent);
    }
    if has_table(tables, "Characters") {
        return Ok(SchemaVariant::CharacterTable);
    }
    Err(SaveEditError::UnsupportedSchema {
        detail: format!(
            "no known layout matches tables [{}]",
            tables.iter().cloned().collect::<Vec<_>>().join(", ")
        ),
    })
}

/// Detect the variant of the database behind `conn`.
pub fn detect_schema(conn: &Connection) -> SaveEditResult<SchemaVariant> {
    let tables = list_tables(conn)?;
    let variant = classify(&tables)?;
    debug!(variant = %variant, table_count = tables.len(), "detected schema variant");
    Ok(variant)
}

/// Tables the variant's layout needs that are absent from `tables`.
pub fn missing_tables(tables: &BTreeSet<String>, variant: SchemaVariant) -> Vec<&'static str> {
    layout_for(variant)
        .tables()
        .into_iter()
        .filter(|t| !has_table(tables, t))
        .collect()
}

/// Fail with `UnsupportedSchema` naming every table the variant needs but lacks.
pub fn verify_layout(tables: &BTreeSet<String>, variant: SchemaVariant) -> SaveEditResult<()> {
    let missing = missing_tables(tables, variant);
    if missing.is_empty() {
        return Ok(());
    }
    Err(SaveEditError::UnsupportedSchema {
        detail: format!(
            "{variant} layout is missing required tables: {}",
            missing.join(", ")
        ),
    })
}
