//! Gemini model identifiers supported for extraction.

use std::str::FromStr;

/// The fixed set of Gemini models suitable for knowledge graph extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GeminiModel {
    /// `gemini-2.5-flash-lite` - fastest and cheapest, the default.
    #[default]
    FlashLite,
    /// `gemini-2.5-flash` - balanced speed and quality.
    Flash,
    /// `gemini-2.5-pro` - highest quality, slowest.
    Pro,
}

impl GeminiModel {
    /// Full model id as sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FlashLite => "gemini-2.5-flash-lite",
            Self::Flash => "gemini-2.5-flash",
            Self::Pro => "gemini-2.5-pro",
        }
    }

    /// Short alias accepted in configuration and on the command line.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::FlashLite => "flash-lite",
            Self::Flash => "flash",
            Self::Pro => "pro",
        }
    }

    /// All supported models, fastest first.
    pub fn all() -> [Self; 3] {
        [Self::FlashLite, Self::Flash, Self::Pro]
    }
}

impl std::fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string names no supported model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Gemini model '{0}' (expected flash-lite, flash, or pro)")]
pub struct ModelParseError(pub String);

impl FromStr for GeminiModel {
    type Err = ModelParseError;

    /// Accepts both the short alias ("flash") and the full id
    /// ("gemini-2.5-flash").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "flash-lite" | "gemini-2.5-flash-lite" => Ok(Self::FlashLite),
            "flash" | "gemini-2.5-flash" => Ok(Self::Flash),
            "pro" | "gemini-2.5-pro" => Ok(Self::Pro),
            other => Err(ModelParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_and_full_ids_parse() {
        for model in GeminiModel::all() {
            assert_eq!(model.alias().parse::<GeminiModel>().unwrap(), model);
            assert_eq!(model.as_str().parse::<GeminiModel>().unwrap(), model);
        }
    }

    #[test]
    fn test_unknown_model_rejected() {
        let err = "gemini-1.0-ultra".parse::<GeminiModel>().unwrap_err();
        assert_eq!(err.0, "gemini-1.0-ultra");
    }

    #[test]
    fn test_default_is_flash_lite() {
        assert_eq!(GeminiModel::default(), GeminiModel::FlashLite);
        assert_eq!(GeminiModel::default().as_str(), "gemini-2.5-flash-lite");
    }
}
