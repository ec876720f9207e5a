//! Configuration management for nodus.
//!
//! Secrets (the Gemini API key) come exclusively from environment
//! variables; non-sensitive settings come from a TOML file.
//!
//! # Configuration Sources
//!
//! ## Secrets (Environment Variables)
//! - `GEMINI_API_KEY` - Google Gemini API key
//!
//! ## Settings (TOML File)
//! Located at `~/.config/nodus/config.toml`:
//! ```toml
//! default_model = "flash-lite"
//! max_input_chars = 50000
//!
//! [viz]
//! theme = "dark"
//! physics = true
//!
//! [logging]
//! level = "info"
//! ```

mod secrets;
mod settings;

pub use secrets::Secrets;
pub use settings::{LoggingSettings, Settings, SettingsError, VizSettings};

use crate::model::{GeminiModel, ModelParseError};

/// Load a `.env` file if one is present (development convenience).
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Combined configuration containing both secrets and settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Secrets loaded from environment variables.
    pub secrets: Secrets,
    /// Settings loaded from the TOML configuration file.
    pub settings: Settings,
    default_model: GeminiModel,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Invalid default model in settings: {0}")]
    InvalidDefaultModel(#[from] ModelParseError),
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Loads secrets from environment variables (after reading `.env` if
    /// present) and settings from the TOML file, creating it with defaults
    /// when missing. The configured default model must name a supported
    /// Gemini model.
    pub fn load() -> Result<Self, ConfigError> {
        load_dotenv();
        let secrets = Secrets::from_env();
        let settings = Settings::load()?;
        Self::from_parts(secrets, settings)
    }

    /// Combine already-loaded secrets and settings.
    pub fn from_parts(secrets: Secrets, settings: Settings) -> Result<Self, ConfigError> {
        let default_model: GeminiModel = settings.default_model.parse()?;
        Ok(Self {
            secrets,
            settings,
            default_model,
        })
    }

    /// The Gemini API key, if one is configured.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.secrets.gemini_api_key.as_deref()
    }

    /// The validated default extraction model.
    pub fn default_model(&self) -> GeminiModel {
        self.default_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_resolves_default_model() {
        let mut settings = Settings::default();
        settings.default_model = "pro".to_string();

        let config = Config::from_parts(Secrets::default(), settings).unwrap();
        assert_eq!(config.default_model(), GeminiModel::Pro);
    }

    #[test]
    fn test_from_parts_rejects_unknown_model() {
        let mut settings = Settings::default();
        settings.default_model = "palm-2".to_string();

        let err = Config::from_parts(Secrets::default(), settings).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDefaultModel(_)));
    }

    #[test]
    fn test_api_key_accessor() {
        let secrets = Secrets {
            gemini_api_key: Some("test-key".to_string()),
        };
        let config = Config::from_parts(secrets, Settings::default()).unwrap();
        assert_eq!(config.gemini_api_key(), Some("test-key"));
    }
}
