//! Application configuration for verso-enrich.
//!
//! The tool runs on defaults. A TOML file is read only when its path is
//! passed explicitly with `--config`. CLI flags override config file values,
//! which override defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EnrichError, Result};

/// Levels accepted by `[logging] level`.
const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Diagnostics settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level for the tool's own events when no `-v` is given.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "warn".into()
}

impl LoggingConfig {
    /// Reject levels `tracing` does not know about.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(EnrichError::config(format!(
                "unknown log level `{}` (expected one of: {})",
                self.level,
                LOG_LEVELS.join(", ")
            )))
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| EnrichError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        EnrichError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    config.logging.validate()?;

    tracing::debug!(?path, "loaded config file");
    Ok(config)
}

/// Use defaults unless a config path was given. Defaults never touch the disk.
pub fn resolve_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_config_from(path),
        None => Ok(AppConfig::default()),
    }
}
