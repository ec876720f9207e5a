//! Google Gemini API client.
//!
//! One `generateContent` call per operation, forced into JSON mode with an
//! explicit response schema. The API key travels in the `x-goog-api-key`
//! header so it never appears in URLs or logs.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ExtractError, ExtractResult};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Gemini API client.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// Request body for the Gemini generateContent API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: SystemInstruction,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

/// A content turn (always a single user turn here).
#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// System instruction for Gemini.
#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

/// Generation configuration forcing schema-constrained JSON output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
    max_output_tokens: u32,
}

/// Safety setting entry.
#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

fn default_safety_settings() -> Vec<SafetySetting> {
    const CATEGORIES: [&str; 4] = [
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    ];

    CATEGORIES
        .into_iter()
        .map(|category| SafetySetting {
            category,
            threshold: "BLOCK_MEDIUM_AND_ABOVE",
        })
        .collect()
}

/// Response from the generateContent API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

/// Candidate response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

/// Candidate content.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// Candidate part; only text parts are expected in JSON mode.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

/// Usage metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Current model id.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one schema-constrained request and return the response text.
    pub async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
        response_schema: Value,
    ) -> ExtractResult<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: user_text.to_string(),
                }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
            safety_settings: default_safety_settings(),
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(ExtractError::from_status(status.as_u16(), response_text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "Gemini usage"
            );
        }

        response_text_content(parsed)
    }
}

/// Pull the text payload out of a parsed response, surfacing truncation and
/// empty responses as typed errors.
pub fn response_text_content(response: GenerateContentResponse) -> ExtractResult<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(ExtractError::NoContent)?;

    if let Some(reason) = candidate.finish_reason.as_deref() {
        if reason == "MAX_TOKENS" {
            warn!("response truncated (finish reason MAX_TOKENS)");
            return Err(ExtractError::TokenLimit);
        }
        if reason != "STOP" {
            warn!(finish_reason = reason, "response may be incomplete");
        }
    }

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ExtractError::NoContent);
    }

    Ok(text)
}
