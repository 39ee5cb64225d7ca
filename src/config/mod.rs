//! Configuration system for linequill.
//!
//! This module provides the configuration structure for linequill with
//! sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and falls back to the
//! defaults when the file is missing or malformed.
//!
//! # Example
//!
//! ```
//! use linequill::config::Config;
//!
//! let config = Config::default();
//! assert!(config.show_line_numbers);
//! assert!(!config.relative_line_numbers);
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the linequill application.
///
/// # Fields
///
/// * `show_line_numbers` - Display line numbers in the editor (default: true)
/// * `relative_line_numbers` - Show line numbers relative to the cursor,
///   like vim's relativenumber (default: false)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display line numbers in the editor
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Show line numbers relative to the cursor row
    #[serde(default)]
    pub relative_line_numbers: bool,
}

/// Returns the default for showing line numbers.
fn default_show_line_numbers() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            relative_line_numbers: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/linequill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("linequill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't
    /// be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from a specific path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, toml_string)?;

        Ok(())
    }
}
