//! Shared fixtures: both schema variants, seeders and scripted backup guards.

#![allow(dead_code)]

use std::cell::Cell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rusqlite::{params, Connection};
use scumdb_core::{IBackupGuard, SaveEditError, SaveEditResult};

pub const ENTITY_COMPONENT_SCHEMA: &str = r#"
CREATE TABLE entity (id INTEGER PRIMARY KEY, class TEXT);
CREATE TABLE entity_component (id INTEGER PRIMARY KEY, entity_id INTEGER, data BLOB);
CREATE TABLE user_profile (id INTEGER PRIMARY KEY, user_id TEXT NOT NULL UNIQUE, name TEXT);
CREATE TABLE fame (user_id TEXT PRIMARY KEY, fame_points INTEGER, money INTEGER, gold INTEGER);
CREATE TABLE character_stats (
    user_id TEXT PRIMARY KEY,
    strength_level INTEGER,
    constitution_level INTEGER,
    dexterity_level INTEGER,
    intelligence_level INTEGER
);
CREATE TABLE body_simulation (user_id TEXT PRIMARY KEY, muscle_mass INTEGER);
CREATE TABLE prisoner_rest (user_id TEXT PRIMARY KEY, rest_quality INTEGER);
CREATE TABLE prisoner_injury (user_id TEXT PRIMARY KEY, damage INTEGER, head_damage INTEGER);
"#;

pub const CHARACTER_TABLE_SCHEMA: &str = r#"
CREATE TABLE Characters (
    Id INTEGER PRIMARY KEY,
    Name TEXT,
    FamePoints INTEGER,
    Money INTEGER,
    Gold INTEGER
);
CREATE TABLE CharacterStats (
    CharacterId INTEGER PRIMARY KEY,
    StrengthLevel INTEGER,
    ConstitutionLevel INTEGER,
    DexterityLevel INTEGER,
    IntelligenceLevel INTEGER
);
CREATE TABLE BodySimulation (CharacterId INTEGER PRIMARY KEY, MuscleMass INTEGER);
CREATE TABLE RestState (CharacterId INTEGER PRIMARY KEY, RestQuality INTEGER);
CREATE TABLE Injuries (CharacterId INTEGER PRIMARY KEY, Damage INTEGER, HeadDamage INTEGER);
"#;

/// Every table a variant-B save writes to.
pub const CHARACTER_TABLES: [&str; 5] = [
    "Characters",
    "CharacterStats",
    "BodySimulation",
    "RestState",
    "Injuries",
];

/// Full stored state of one variant-B character, row by row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterSeed {
    pub id: i64,
    pub fame: i64,
    pub money: i64,
    pub gold: i64,
    pub strength: i64,
    pub constitution: i64,
    pub dexterity: i64,
    pub intelligence: i64,
    pub muscle_mass: Option<i64>,
    pub rest_quality: Option<i64>,
    pub damage: Option<(i64, i64)>,
}

pub fn character_table_db(path: &Path) -> Connection {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(CHARACTER_TABLE_SCHEMA).unwrap();
    conn
}

pub fn entity_component_db(path: &Path) -> Connection {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(ENTITY_COMPONENT_SCHEMA).unwrap();
    conn
}

pub fn seed_character(conn: &Connection, name: Option<&str>, s: &CharacterSeed) {
    conn.execute(
        "INSERT INTO Characters (Id, Name, FamePoints, Money, Gold) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![s.id, name, s.fame, s.money, s.gold],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO CharacterStats VALUES (?1, ?2, ?3, ?4, ?5)",
        params![s.id, s.strength, s.constitution, s.dexterity, s.intelligence],
    )
    .unwrap();
    if let Some(mm) = s.muscle_mass {
        conn.execute("INSERT INTO BodySimulation VALUES (?1, ?2)", params![s.id, mm])
            .unwrap();
    }
    if let Some(rq) = s.rest_quality {
        conn.execute("INSERT INTO RestState VALUES (?1, ?2)", params![s.id, rq])
            .unwrap();
    }
    if let Some((dmg, head)) = s.damage {
        conn.execute("INSERT INTO Injuries VALUES (?1, ?2, ?3)", params![s.id, dmg, head])
            .unwrap();
    }
}

pub fn seed_profile(conn: &Connection, user_id: &str, name: &str, fame: i64, strength: i64, muscle: i64) {
    conn.execute(
        "INSERT INTO user_profile (user_id, name) VALUES (?1, ?2)",
        params![user_id, name],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO fame VALUES (?1, ?2, 100, 5)",
        params![user_id, fame],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO character_stats VALUES (?1, ?2, 3, 3, 3)",
        params![user_id, strength],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO body_simulation VALUES (?1, ?2)",
        params![user_id, muscle],
    )
    .unwrap();
}

/// Dump every row of a table as text, in rowid order, for before/after comparison.
pub fn dump_table(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM {table} ORDER BY rowid"))
        .unwrap();
    let cols = stmt.column_count();
    stmt.query_map([], |row| {
        let mut parts = Vec::with_capacity(cols);
        for i in 0..cols {
            let v: rusqlite::types::Value = row.get(i)?;
            parts.push(format!("{v:?}"));
        }
        Ok(parts.join("|"))
    })
    .unwrap()
    .collect::<Result<Vec<_>, _>>()
    .unwrap()
}

pub fn dump_tables(conn: &Connection, tables: &[&str]) -> Vec<Vec<String>> {
    tables.iter().map(|t| dump_table(conn, t)).collect()
}

/// `.bak` files next to `db`.
pub fn backups_of(db: &Path) -> Vec<PathBuf> {
    let name = db.file_name().unwrap().to_string_lossy().into_owned();
    let mut found: Vec<PathBuf> = std::fs::read_dir(db.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            let f = p.file_name().unwrap().to_string_lossy();
            f.starts_with(&format!("{name}.")) && f.ends_with(".bak")
        })
        .collect();
    found.sort();
    found
}

/// Guard that always fails, as a full disk or read-only directory would.
pub struct FailingBackup {
    pub calls: Rc<Cell<usize>>,
}

impl IBackupGuard for FailingBackup {
    fn backup(&self, source: &Path) -> SaveEditResult<Option<PathBuf>> {
        self.calls.set(self.calls.get() + 1);
        Err(SaveEditError::BackupFailed {
            path: source.with_extension("bak"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only directory"),
        })
    }
}

/// Guard that records calls and copies nothing.
pub struct CountingBackup {
    pub calls: Rc<Cell<usize>>,
}

impl IBackupGuard for CountingBackup {
    fn backup(&self, _source: &Path) -> SaveEditResult<Option<PathBuf>> {
        self.calls.set(self.calls.get() + 1);
        Ok(None)
    }
}
