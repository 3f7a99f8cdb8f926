//! Local persistence: TOML configuration and the SQLite activity log.

mod config;
pub mod database;

pub use config::Config;
pub use database::{Database, SampleRecord};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/clarvu[-dev]/` based on CLARVU_ENV.
///
/// Set CLARVU_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CLARVU_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("clarvu-dev")
    } else {
        base_dir.join("clarvu")
    };

    std::fs::create_dir_all(&dir).map_err(|_| ConfigError::NoDataDir)?;
    Ok(dir)
}
