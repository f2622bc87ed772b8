//! Configuration file
//!
//! ```json
//! { "log_level": "warn", "indent_level": 0, "spaces_per_level": 2 }
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Initial indentation level used by `describe` (default 0)
    #[serde(default)]
    pub indent_level: i32,

    /// Spaces per indentation level; negative prints one line (default 4)
    #[serde(default = "default_spaces_per_level")]
    pub spaces_per_level: i32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_spaces_per_level() -> i32 {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            indent_level: 0,
            spaces_per_level: default_spaces_per_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.severity()?;
        Ok(())
    }

    /// Parsed log level
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(format!("Invalid log_level: {}", e)))
    }
}
