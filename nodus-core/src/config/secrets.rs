//! Secrets configuration loaded from environment variables only.
//!
//! Sensitive values are never written to disk or serialized; they are read
//! from the environment each time configuration is loaded.

use std::env;

/// Secrets loaded exclusively from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    /// Gemini API key (env: GEMINI_API_KEY).
    pub gemini_api_key: Option<String>,
}

impl Secrets {
    /// Read secrets from the current environment.
    ///
    /// A missing key is not an error here: listing models or rendering an
    /// already-extracted graph needs no credential. The extractor rejects
    /// construction without a key.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}
