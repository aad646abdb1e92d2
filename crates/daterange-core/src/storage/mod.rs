mod config;

pub use config::Config;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/daterange[-dev]/` based on DATERANGE_ENV.
///
/// Set DATERANGE_ENV=dev to use development data directory. When the home
/// directory cannot be determined, the current directory (`.`) is used as
/// the base instead, giving `./.config/daterange[-dev]/`.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DATERANGE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("daterange-dev")
    } else {
        base_dir.join("daterange")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
