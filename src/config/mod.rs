//! Configuration system for objpluck.
//!
//! This module provides the configuration structure for the `objpluck` tool
//! with sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and merged with
//! command-line arguments, which take precedence.
//!
//! # Example
//!
//! ```
//! use objpluck::config::{Config, OutputFormat};
//!
//! let config = Config::default();
//! assert_eq!(config.output, OutputFormat::Yaml);
//! assert_eq!(config.missing_exit_code, 1);
//!
//! let custom = Config {
//!     output: OutputFormat::Json,
//!     ..Config::default()
//! };
//! assert!(custom.pretty_json);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How plucked values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// YAML text
    #[default]
    Yaml,
    /// JSON text
    Json,
    /// Strings unquoted, other scalars as text, containers as JSON
    Raw,
}

/// Configuration for the objpluck tool.
///
/// # Fields
///
/// * `output` - Output format (default: yaml)
/// * `pretty_json` - Indent JSON output (default: true)
/// * `log_level` - Log filter used when `RUST_LOG` is unset (default: "warn")
/// * `missing_exit_code` - Exit status when the path does not resolve (default: 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format
    #[serde(default)]
    pub output: OutputFormat,

    /// Indent JSON output
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,

    /// Log filter directive, e.g. "warn" or "objpluck=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Exit status when the path does not resolve
    #[serde(default = "default_missing_exit_code")]
    pub missing_exit_code: u8,
}

fn default_pretty_json() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_missing_exit_code() -> u8 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            pretty_json: default_pretty_json(),
            log_level: default_log_level(),
            missing_exit_code: default_missing_exit_code(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/objpluck/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("objpluck");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                eprintln!(
                    "Warning: ignoring invalid config {}: {}",
                    path.display(),
                    err
                );
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config {}", path.display()))?;

        Ok(())
    }
}
