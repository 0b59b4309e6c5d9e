//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use romcalc_domain::ArabicRange;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Accepted arabic operand values
    #[serde(default)]
    pub arabic_range: RangeSetting,

    /// Stop the REPL at the first failed expression
    #[serde(default)]
    pub exit_on_error: bool,

    /// Log filter used when `ROMCALC_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare answer
    Plain,
    /// JSON object per answer
    Json,
}

/// Arabic operand policy as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSetting {
    /// Any integer
    #[default]
    Unrestricted,
    /// 1 through 10 only
    Strict,
}

impl From<RangeSetting> for ArabicRange {
    fn from(setting: RangeSetting) -> Self {
        match setting {
            RangeSetting::Unrestricted => ArabicRange::Unrestricted,
            RangeSetting::Strict => ArabicRange::Strict,
        }
    }
}

impl Config {
    /// Directory holding config and history.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".romcalc"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from the default path or fall back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Plain,
            history_size: 1000,
            arabic_range: RangeSetting::Unrestricted,
            exit_on_error: false,
            log_level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Plain
}

fn default_history_size() -> usize {
    1000
}

fn default_log_level() -> String {
    "warn".to_string()
}
