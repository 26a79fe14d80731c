//! Notice configuration.
//!
//! Supports TOML config files, environment variable overrides, and defaults.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{NoticeError, Result};

/// Notice configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Category selected when a session starts (default: EPT)
    pub default_category: Category,
    /// Text written between messages when several go to one sink
    pub message_separator: String,
    /// Log level filter for the command-line tool (e.g. "debug")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            default_category: Category::Ept,
            message_separator: "\n\n----------\n\n".to_string(),
            log_level: None,
        }
    }
}

impl NoticeConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| NoticeError::ConfigError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| NoticeError::ConfigError(format!("Invalid TOML: {}", e)))
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| NoticeError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Applies environment variable overrides.
    /// Environment variables are prefixed with `NOTICE_`.
    /// Example: `NOTICE_DEFAULT_CATEGORY=toefl_jr` overrides `default_category`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = env::var("NOTICE_DEFAULT_CATEGORY") {
            self.default_category = val.parse().map_err(|_| {
                NoticeError::ConfigError(format!("Invalid default_category: {}", val))
            })?;
        }
        if let Ok(val) = env::var("NOTICE_MESSAGE_SEPARATOR") {
            self.message_separator = val;
        }
        if let Ok(val) = env::var("NOTICE_LOG_LEVEL") {
            self.log_level = Some(val);
        }
        Ok(())
    }
}
