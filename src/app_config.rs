use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code, used verbatim in the markup and emitted as
    /// the final unconditional branch of the generated output
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Required prefix of region marker names
    #[serde(default = "default_marker_prefix")]
    pub marker_prefix: String,

    /// Path of the persisted translation table
    #[serde(default = "default_table_path")]
    pub table_path: PathBuf,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_marker_prefix() -> String {
    "HTTP_".to_string()
}

fn default_table_path() -> PathBuf {
    PathBuf::from("translation.json")
}

impl Config {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("Failed to open config file {:?}: {}", path.as_ref(), e))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path.as_ref(), e))?;

        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config to JSON: {}", e))?;

        std::fs::write(&path, json)
            .map_err(|e| anyhow!("Failed to write config file {:?}: {}", path.as_ref(), e))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.source_language.is_empty() {
            return Err(anyhow!("Source language must not be empty"));
        }
        if !self
            .source_language
            .chars()
            .all(|c| c.is_ascii_lowercase())
        {
            return Err(anyhow!(
                "Invalid source language code: {}",
                self.source_language
            ));
        }

        if self.marker_prefix.is_empty() {
            return Err(anyhow!("Marker prefix must not be empty"));
        }
        if !self
            .marker_prefix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c == '_')
        {
            return Err(anyhow!(
                "Marker prefix must be uppercase identifiers: {}",
                self.marker_prefix
            ));
        }

        if self.table_path.as_os_str().is_empty() {
            return Err(anyhow!("Translation table path must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            marker_prefix: default_marker_prefix(),
            table_path: default_table_path(),
            log_level: LogLevel::default(),
        }
    }
}
