//! Knowledge graph extraction against the Google Gemini API.
//!
//! The [`Extractor`] turns free text into a validated
//! [`KnowledgeGraph`](nodus_core::KnowledgeGraph) with one Gemini call per
//! operation. It holds no state between calls and never retries; transient
//! failures surface to the caller, and cancellation is dropping the future.

pub mod error;
pub mod gemini;
pub mod prompt;
pub mod schema;

pub use error::{ExtractError, ExtractResult};
pub use gemini::GeminiClient;
pub use schema::{ExecutiveSummary, ExtractionOutcome};

use std::time::Instant;

use tracing::info;

use nodus_core::{Config, GeminiModel, KnowledgeGraph};

/// Default bound on accepted input length, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 50_000;

/// Extract knowledge graphs and executive summaries from text.
#[derive(Debug)]
pub struct Extractor {
    client: GeminiClient,
    max_input_chars: usize,
}

impl Extractor {
    /// Create an extractor with an explicit credential and model.
    pub fn new(api_key: impl Into<String>, model: GeminiModel) -> Self {
        Self {
            client: GeminiClient::new(api_key, model.as_str()),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }

    /// Create an extractor from loaded configuration.
    ///
    /// Fails with [`ExtractError::MissingApiKey`] when no credential is
    /// configured; `model` overrides the configured default when given.
    pub fn from_config(config: &Config, model: Option<GeminiModel>) -> ExtractResult<Self> {
        let api_key = config.gemini_api_key().ok_or(ExtractError::MissingApiKey)?;
        let model = model.unwrap_or_else(|| config.default_model());

        Ok(Self::new(api_key, model).with_max_input_chars(config.settings.max_input_chars))
    }

    /// Override the accepted input length bound.
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    /// Model id used for requests.
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Reject blank or oversized input before any network call is made.
    fn check_input(&self, text: &str) -> ExtractResult<()> {
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyInput);
        }

        let len = text.chars().count();
        if len > self.max_input_chars {
            return Err(ExtractError::InputTooLong {
                len,
                max: self.max_input_chars,
            });
        }

        Ok(())
    }

    /// Extract a knowledge graph from the provided text.
    pub async fn extract(&self, text: &str) -> ExtractResult<KnowledgeGraph> {
        self.check_input(text)?;

        let wrapped = prompt::wrap_user_content(text);
        let start = Instant::now();
        let raw = self
            .client
            .generate(
                prompt::EXTRACTION_SYSTEM_PROMPT,
                &wrapped,
                schema::knowledge_graph_schema(),
            )
            .await?;

        let graph: KnowledgeGraph = serde_json::from_str(&raw)?;
        let graph = graph.validated();

        info!(
            nodes = graph.nodes.len(),
            relationships = graph.relationships.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "extracted knowledge graph"
        );

        Ok(graph)
    }

    /// Create an executive summary of the provided text.
    pub async fn summarize(&self, text: &str) -> ExtractResult<ExecutiveSummary> {
        self.check_input(text)?;

        let wrapped = prompt::wrap_user_content(text);
        let start = Instant::now();
        let raw = self
            .client
            .generate(
                prompt::SUMMARY_SYSTEM_PROMPT,
                &wrapped,
                schema::executive_summary_schema(),
            )
            .await?;

        let summary: ExecutiveSummary = serde_json::from_str(&raw)?;

        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generated executive summary"
        );

        Ok(summary)
    }

    /// Run summarization, then graph extraction.
    ///
    /// With `use_summary_for_kg` the graph is built from the structured
    /// summary text, which typically yields a higher-level, more focused
    /// graph than the raw input.
    pub async fn extract_with_summary(
        &self,
        text: &str,
        use_summary_for_kg: bool,
    ) -> ExtractResult<ExtractionOutcome> {
        let summary = self.summarize(text).await?;

        let graph_input = if use_summary_for_kg {
            summary.as_text()
        } else {
            text.to_string()
        };
        let knowledge_graph = self.extract(&graph_input).await?;

        Ok(ExtractionOutcome {
            summary: Some(summary),
            knowledge_graph,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> Extractor {
        Extractor::new("test-key", GeminiModel::FlashLite)
    }

    #[tokio::test]
    async fn test_empty_input_rejected_before_network() {
        // No server exists for the client; an error other than EmptyInput
        // would mean a request was attempted.
        let err = extractor().extract("   \n\t ").await.unwrap_err();
        assert!(matches!(err, ExtractError::EmptyInput));
    }

    #[tokio::test]
    async fn test_oversized_input_rejected_before_network() {
        let extractor = extractor().with_max_input_chars(16);
        let err = extractor
            .extract("this input is definitely longer than sixteen characters")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ExtractError::InputTooLong { max: 16, .. }
        ));
    }

    #[tokio::test]
    async fn test_summarize_applies_same_input_guards() {
        let err = extractor().summarize("").await.unwrap_err();
        assert!(matches!(err, ExtractError::EmptyInput));
    }

    #[test]
    fn test_missing_api_key_fails_construction() {
        let config = nodus_core::Config::from_parts(
            nodus_core::Secrets::default(),
            nodus_core::Settings::default(),
        )
        .unwrap();

        let err = Extractor::from_config(&config, None).unwrap_err();
        assert!(matches!(err, ExtractError::MissingApiKey));
    }

    #[test]
    fn test_model_override_wins_over_config() {
        let config = nodus_core::Config::from_parts(
            nodus_core::Secrets {
                gemini_api_key: Some("test-key".to_string()),
            },
            nodus_core::Settings::default(),
        )
        .unwrap();

        let extractor = Extractor::from_config(&config, Some(GeminiModel::Pro)).unwrap();
        assert_eq!(extractor.model(), "gemini-2.5-pro");
    }
}
