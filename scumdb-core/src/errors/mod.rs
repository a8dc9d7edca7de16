//! Error types for every save-editor operation.

mod save_edit_error;

pub use save_edit_error::{SaveEditError, SaveEditResult};
