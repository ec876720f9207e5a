//! Error taxonomy for Gemini-based extraction.
//!
//! Failures are classified into user-meaningful buckets so a caller can
//! display a clear message while logs retain the provider detail. Nothing
//! here retries; transient errors are surfaced and retry policy belongs to
//! the caller.

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("no Gemini API key configured")]
    MissingApiKey,

    #[error("input text is empty")]
    EmptyInput,

    #[error("input text is too long ({len} characters, maximum {max})")]
    InputTooLong { len: usize, max: usize },

    #[error("authentication failed (HTTP {status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("API quota exceeded: {message}")]
    QuotaExceeded { message: String },

    #[error("Gemini service unavailable (HTTP {status}): {message}")]
    Unavailable { status: u16, message: String },

    #[error("network error contacting Gemini: {0}")]
    Network(#[from] reqwest::Error),

    #[error("response truncated by token limit")]
    TokenLimit,

    #[error("response contained no content")]
    NoContent,

    #[error("response did not match the expected schema: {0}")]
    SchemaValidation(#[from] serde_json::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}

pub type ExtractResult<T> = Result<T, ExtractError>;

impl ExtractError {
    /// Classify a non-success HTTP status into an error bucket.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::Authentication { status, message },
            429 => Self::QuotaExceeded { message },
            500..=599 => Self::Unavailable { status, message },
            _ => Self::Api { status, message },
        }
    }

    /// Whether the failure is transient and safe to retry with backoff.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Unavailable { .. })
    }

    /// A stable message suitable for direct display to an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingApiKey => {
                "No Gemini API key is configured. Set GEMINI_API_KEY to use the extractor."
            }
            Self::EmptyInput => "Please provide text to extract a knowledge graph from.",
            Self::InputTooLong { .. } => {
                "The input text is too long. Shorten it and try again."
            }
            Self::Authentication { .. } => {
                "The Gemini API rejected the configured API key. Check GEMINI_API_KEY."
            }
            Self::QuotaExceeded { .. } => {
                "The Gemini API rate limit has been reached. Wait a bit before trying again."
            }
            Self::Unavailable { .. } => {
                "The Gemini service is temporarily unavailable. Try again in a few minutes."
            }
            Self::Network(_) => {
                "There was a network problem contacting Gemini. Check your connection and try again."
            }
            Self::TokenLimit => {
                "The response from Gemini was too large to process. Try a shorter input."
            }
            Self::NoContent | Self::SchemaValidation(_) => {
                "Gemini returned a response, but it could not be understood. Try simplifying the input."
            }
            Self::Api { .. } => "An unexpected error occurred while contacting Gemini.",
        }
    }
}
