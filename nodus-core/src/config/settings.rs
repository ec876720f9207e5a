//! Settings configuration loaded from TOML files.
//!
//! Non-sensitive configuration lives in TOML format in the XDG config
//! directory (`~/.config/nodus/config.toml`). A commented default file is
//! written on first load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default TOML configuration file content.
const DEFAULT_CONFIG_TOML: &str = r#"# nodus configuration file
# Located at: ~/.config/nodus/config.toml
#
# This file contains non-sensitive configuration.
# The API key is loaded from the environment:
#   - GEMINI_API_KEY

# Extraction model: "flash-lite", "flash" or "pro"
# (full ids such as "gemini-2.5-flash" are also accepted)
default_model = "flash-lite"

# Inputs longer than this are rejected before any API call
max_input_chars = 50000

[viz]
# "dark" or "light"
theme = "dark"
# Force-directed layout; disable for a static layout
physics = true
# Render nodes that participate in no relationship
show_isolated = false

[logging]
level = "info"
"#;

/// Application settings persisted as TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Extraction model alias or full id (validated by `Config::load`).
    pub default_model: String,

    /// Maximum accepted input length, in characters.
    pub max_input_chars: usize,

    /// Visualization defaults.
    pub viz: VizSettings,

    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_model: "flash-lite".to_string(),
            max_input_chars: 50_000,
            viz: VizSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Visualization defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VizSettings {
    /// "dark" or "light".
    pub theme: String,
    /// Force-directed physics simulation.
    pub physics: bool,
    /// Render nodes with no valid relationship.
    pub show_isolated: bool,
}

impl Default for VizSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            physics: true,
            show_isolated: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default tracing filter when RUST_LOG is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Errors that can occur when loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config directory not found")]
    ConfigDirNotFound,
}

impl Settings {
    /// Load settings from the TOML configuration file.
    ///
    /// If the config file doesn't exist, creates it with default values.
    pub fn load() -> Result<Self, SettingsError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("Creating default configuration at {:?}", config_path);
            Self::create_default_config(&config_path)?;
        }

        let content = fs::read_to_string(&config_path)?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings)
    }

    /// Serialize settings to TOML content.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the configuration file path.
    ///
    /// Uses the XDG config directory (`~/.config/nodus/config.toml`);
    /// `NODUS_CONFIG_DIR` overrides the directory for tests and packaging.
    pub fn config_path() -> Result<PathBuf, SettingsError> {
        if let Ok(override_dir) = std::env::var("NODUS_CONFIG_DIR") {
            return Ok(PathBuf::from(override_dir).join("config.toml"));
        }

        let config_dir = dirs::config_dir()
            .ok_or(SettingsError::ConfigDirNotFound)?
            .join("nodus");

        Ok(config_dir.join("config.toml"))
    }

    /// Create the default configuration file.
    fn create_default_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, DEFAULT_CONFIG_TOML)?;
        Ok(())
    }

    /// Save settings to a specific file path.
    pub fn save_to_path(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        fs::write(path, content)?;
        Ok(())
    }
}
