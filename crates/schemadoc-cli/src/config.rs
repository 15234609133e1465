//! Configuration management for the CLI
//!
//! Configuration is layered, later layers winning:
//! - Default values
//! - Configuration file (TOML/YAML/JSON)
//! - Command-line arguments

use crate::error::{Error, ErrorContext, Result};
use schemadoc_core::{ExtractOptions, RenderOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Theme used when neither flags nor config name one
pub const DEFAULT_THEME: &str = "standard";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extraction settings
    pub extract: ExtractOptions,

    /// Rendering settings
    pub render: RenderConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Theme name
    pub theme: String,

    /// Theme-independent render options
    #[serde(flatten)]
    pub options: RenderOptions,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); verbosity flags win when absent
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            options: RenderOptions::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Load configuration from a file, choosing the format by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        let config = match extension.as_deref() {
            Some("toml") => toml::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable config file");
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) if !path.exists() => Err(Error::config(format!(
                "config file {} does not exist",
                path.display()
            ))),
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".schemadoc.toml"),
            PathBuf::from(".schemadoc.yaml"),
            PathBuf::from(".schemadoc.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let schemadoc_dir = config_dir.join("schemadoc");
            paths.push(schemadoc_dir.join("config.toml"));
            paths.push(schemadoc_dir.join("config.yaml"));
            paths.push(schemadoc_dir.join("config.json"));
        }

        paths
    }
}
