//! End-to-end parsing of canned Gemini responses into validated graphs.

use nodus_core::KnowledgeGraph;
use nodus_extract::ExtractError;
use nodus_extract::gemini::{GenerateContentResponse, response_text_content};

/// Wrap an inner JSON payload in the generateContent envelope.
fn envelope(payload: &str) -> GenerateContentResponse {
    let body = serde_json::json!({
        "candidates": [{
            "content": {"parts": [{"text": payload}], "role": "model"},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 80}
    });
    serde_json::from_value(body).unwrap()
}

fn graph_from(payload: &str) -> Result<KnowledgeGraph, ExtractError> {
    let text = response_text_content(envelope(payload))?;
    let graph: KnowledgeGraph = serde_json::from_str(&text)?;
    Ok(graph.validated())
}

#[test]
fn alice_works_at_techcorp() {
    let graph = graph_from(
        r#"{
            "nodes": [
                {"id": "alice", "type": "person"},
                {"id": "techcorp", "type": "organization"}
            ],
            "relationships": [
                {"id": "r1", "type": "WORKS_AT",
                 "source_node_id": "alice", "target_node_id": "techcorp"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.relationships.len(), 1);
    assert_eq!(graph.relationships[0].rel_type, "WORKS_AT");
    // Labels derived from ids when the model omits them.
    assert_eq!(graph.node("alice").unwrap().label, "Alice");
    assert_eq!(graph.node("techcorp").unwrap().label, "Techcorp");
}

#[test]
fn relationship_to_unknown_node_is_dropped() {
    let graph = graph_from(
        r#"{
            "nodes": [{"id": "alice", "type": "person"}],
            "relationships": [
                {"id": "r1", "type": "WORKS_AT",
                 "source_node_id": "alice", "target_node_id": "megacorp"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.relationships.is_empty());
}

#[test]
fn duplicate_relationships_collapse() {
    let graph = graph_from(
        r#"{
            "nodes": [
                {"id": "alice", "type": "person"},
                {"id": "techcorp", "type": "organization"}
            ],
            "relationships": [
                {"id": "r1", "type": "WORKS_AT",
                 "source_node_id": "alice", "target_node_id": "techcorp"},
                {"id": "r2", "type": "WORKS_AT",
                 "source_node_id": "alice", "target_node_id": "techcorp"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(graph.relationships.len(), 1);
    assert_eq!(graph.relationships[0].id, "r1");
}

#[test]
fn schema_violations_fail_closed() {
    // Relationship missing its target.
    let err = graph_from(
        r#"{
            "nodes": [{"id": "alice", "type": "person"}],
            "relationships": [
                {"id": "r1", "type": "WORKS_AT", "source_node_id": "alice"}
            ]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ExtractError::SchemaValidation(_)));

    // Node with a non-string id.
    let err = graph_from(r#"{"nodes": [{"id": 34, "type": "age"}], "relationships": []}"#)
        .unwrap_err();
    assert!(matches!(err, ExtractError::SchemaValidation(_)));
}

#[test]
fn non_json_payload_fails_closed() {
    let err = graph_from("I could not produce a graph, sorry!").unwrap_err();
    assert!(matches!(err, ExtractError::SchemaValidation(_)));
}
