//! Seams between the canonical model and its storage implementation.

pub mod backup;
pub mod store;

pub use backup::IBackupGuard;
pub use store::IPlayerStore;
