//! Response schemas and summary types for structured Gemini output.
//!
//! The model is forced into JSON mode with an explicit response schema; the
//! shapes here mirror what `nodus_core::graph` deserializes strictly on the
//! way back in.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use nodus_core::KnowledgeGraph;

/// Response schema for knowledge graph extraction.
pub fn knowledge_graph_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "nodes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Standardized entity key: lowercase, underscores for spaces and special characters, numeric concepts prefixed (e.g. 'age_34'), never a bare integer."
                        },
                        "label": {
                            "type": "string",
                            "description": "The original human-readable name of the entity."
                        },
                        "type": {
                            "type": "string",
                            "description": "Basic lowercase singular category, e.g. 'person', 'organization'."
                        }
                    },
                    "required": ["id", "type"]
                }
            },
            "relationships": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Unique human-readable identifier for the relationship."
                        },
                        "type": {
                            "type": "string",
                            "description": "General UPPERCASE verb phrase with underscores, e.g. 'WORKS_AT'."
                        },
                        "source_node_id": {
                            "type": "string",
                            "description": "id of the source node; must exist in nodes."
                        },
                        "target_node_id": {
                            "type": "string",
                            "description": "id of the target node; must exist in nodes."
                        }
                    },
                    "required": ["id", "type", "source_node_id", "target_node_id"]
                }
            }
        },
        "required": ["nodes", "relationships"]
    })
}

/// Response schema for the executive summary pass.
pub fn executive_summary_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "summary": {
                "type": "string",
                "description": "Structured briefing text with the five labeled sections, understandable without the source document."
            },
            "key_points": {
                "type": "array",
                "items": {"type": "string"},
                "description": "3-7 bullet strings with the most critical facts."
            }
        },
        "required": ["summary"]
    })
}

/// High-level executive summary of an input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    /// Structured briefing text.
    pub summary: String,
    /// Optional bullet-point highlights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
}

impl ExecutiveSummary {
    /// The summary plus key points as one plain-text block.
    pub fn as_text(&self) -> String {
        match &self.key_points {
            Some(points) if !points.is_empty() => {
                let bullets: Vec<String> = points.iter().map(|p| format!("- {p}")).collect();
                format!("{}\n\nKey Points:\n{}", self.summary, bullets.join("\n"))
            }
            _ => self.summary.clone(),
        }
    }
}

/// Bundle of summary plus knowledge graph from one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    /// Present unless the summary pass was skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<ExecutiveSummary>,
    pub knowledge_graph: KnowledgeGraph,
}
