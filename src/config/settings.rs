//! User settings
//!
//! A small JSON settings file alongside the data directory. Every field has a
//! serde default so older files keep loading as settings grow.

use serde::{Deserialize, Serialize};

use super::paths::PursePaths;
use crate::error::{PurseError, PurseResult};

/// User settings for the purse ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in displays
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format for history output (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating defaults if the file doesn't exist
    pub fn load_or_create(paths: &PursePaths) -> PurseResult<Self> {
        let path = paths.settings_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| PurseError::Config(format!("Failed to read settings: {}", e)))?;
        let settings = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PursePaths) -> PurseResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), json)
            .map_err(|e| PurseError::Config(format!("Failed to write settings: {}", e)))?;
        Ok(())
    }
}
