mod config;

pub use config::{Config, ExtensionsConfig, LoggingConfig, ReportConfig, TasksConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/tasktrack[-dev]/` based on TASKTRACK_ENV.
///
/// Set TASKTRACK_ENV=dev to use the development data directory, or
/// TASKTRACK_CONFIG_DIR to point at an explicit directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("TASKTRACK_CONFIG_DIR") {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("TASKTRACK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("tasktrack-dev")
            } else {
                base_dir.join("tasktrack")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
