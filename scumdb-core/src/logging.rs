//! Tracing subscriber setup for binaries and tests embedding the editor core.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::errors::{SaveEditError, SaveEditResult};

/// Install a fmt subscriber. `RUST_LOG` wins over the configured level.
///
/// Returns `Ok(false)` if a global subscriber was already installed.
pub fn init_tracing(config: &LoggingConfig) -> SaveEditResult<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.effective_level()).map_err(|e| {
            SaveEditError::Config(format!(
                "invalid log level '{}': {e}",
                config.effective_level()
            ))
        })?,
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(level = config.effective_level(), "tracing initialized");
    }
    Ok(installed)
}
