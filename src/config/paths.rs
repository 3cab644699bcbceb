//! Path management for the purse ledger
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `PURSE_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/purse-cli` or `~/.config/purse-cli`
//! 3. Windows: `%APPDATA%\purse-cli`

use std::path::PathBuf;

use crate::error::PurseError;

/// Manages all paths used by the purse ledger
#[derive(Debug, Clone)]
pub struct PursePaths {
    /// Base directory for all data
    base_dir: PathBuf,
}

impl PursePaths {
    /// Create a new PursePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PurseError> {
        let base_dir = if let Ok(custom) = std::env::var("PURSE_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PursePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/purse-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/purse-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the ledger database
    pub fn db_file(&self) -> PathBuf {
        self.data_dir().join("purses.db")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), PurseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PurseError::Config(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PurseError::Config(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the ledger has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PurseError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| PurseError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("purse-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PurseError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PurseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("purse-cli"))
}
