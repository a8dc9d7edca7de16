//! # scumdb-core
//!
//! Foundation crate for the SCUM save editor.
//! Defines the canonical player model, schema variants, errors, config,
//! tracing setup and the storage traits. `scumdb-storage` implements them.

pub mod config;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::EditorConfig;
pub use errors::{SaveEditError, SaveEditResult};
pub use traits::{IBackupGuard, IPlayerStore};
pub use types::attributes::{EconomyRecord, PlayerAttributes, RawPlayerColumns};
pub use types::player::{PlayerIdentity, PlayerKey};
pub use types::schema::SchemaVariant;
