//! # scumdb-storage
//!
//! SQLite persistence layer for the SCUM save editor.
//! Detects the schema variant, lists players, maps per-variant columns onto
//! the canonical attribute record and writes it back in one guarded
//! transaction.

pub mod backup;
pub mod connection;
pub mod detect;
pub mod directory;
pub mod engine;
pub mod layout;
pub mod mapper;
pub mod writer;

pub use backup::FileCopyBackup;
pub use connection::DatabaseManager;
pub use engine::SaveEditorEngine;
