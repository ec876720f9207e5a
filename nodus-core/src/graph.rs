//! Knowledge graph data model.
//!
//! A [`KnowledgeGraph`] is built once per extraction from the model's JSON
//! response, normalized by [`KnowledgeGraph::validated`], and treated as
//! immutable afterwards. Insertion order is extraction order and is
//! preserved through normalization.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// An entity or concept in the knowledge graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Standardized identity key: lowercase, underscore-separated.
    ///
    /// Two mentions of the same real-world entity resolve to the same id.
    pub id: String,
    /// Human-readable name. Derived from `id` when the model omits it.
    #[serde(default)]
    pub label: String,
    /// General category, lowercase singular ("person", "organization").
    #[serde(rename = "type")]
    pub node_type: String,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        node_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            node_type: node_type.into(),
        }
    }
}

/// A directed, typed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Human-readable identifier ("acme_corp_works_with_vendor_x").
    pub id: String,
    /// UPPERCASE underscore verb phrase ("WORKS_AT").
    #[serde(rename = "type")]
    pub rel_type: String,
    pub source_node_id: String,
    pub target_node_id: String,
}

impl Relationship {
    pub fn new(
        id: impl Into<String>,
        rel_type: impl Into<String>,
        source_node_id: impl Into<String>,
        target_node_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            rel_type: rel_type.into(),
            source_node_id: source_node_id.into(),
            target_node_id: target_node_id.into(),
        }
    }

    /// Whether source and target are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source_node_id == self.target_node_id
    }
}

/// The complete set of nodes and relationships extracted from one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl KnowledgeGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.relationships.is_empty()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Normalize a freshly deserialized graph.
    ///
    /// Fills missing labels, collapses duplicate relationships (first
    /// occurrence wins) and drops relationships whose endpoints are not
    /// declared as nodes. Idempotent: validating twice yields the same graph.
    pub fn validated(mut self) -> Self {
        for node in &mut self.nodes {
            if node.label.trim().is_empty() {
                node.label = derive_label(&node.id);
                debug!(id = %node.id, label = %node.label, "auto-generated node label");
            }
        }

        self.dedup_relationships();
        self.drop_dangling_relationships();
        self
    }

    /// Collapse duplicate relationships, both by id and by the semantic
    /// (source, type, target) triple. The first occurrence survives.
    fn dedup_relationships(&mut self) {
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut seen_triples: HashSet<(String, String, String)> = HashSet::new();

        self.relationships.retain(|rel| {
            let triple = (
                rel.source_node_id.clone(),
                rel.rel_type.clone(),
                rel.target_node_id.clone(),
            );
            let fresh = !seen_ids.contains(&rel.id) && !seen_triples.contains(&triple);
            if fresh {
                seen_ids.insert(rel.id.clone());
                seen_triples.insert(triple);
            } else {
                warn!(
                    id = %rel.id,
                    source = %rel.source_node_id,
                    rel_type = %rel.rel_type,
                    target = %rel.target_node_id,
                    "removed duplicate relationship"
                );
            }
            fresh
        });
    }

    /// Drop relationships that reference node ids absent from the node set.
    fn drop_dangling_relationships(&mut self) {
        let node_ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();

        self.relationships.retain(|rel| {
            let valid = node_ids.contains(rel.source_node_id.as_str())
                && node_ids.contains(rel.target_node_id.as_str());
            if !valid {
                warn!(
                    id = %rel.id,
                    source = %rel.source_node_id,
                    target = %rel.target_node_id,
                    "dropped relationship with unknown endpoint"
                );
            }
            valid
        });
    }
}

/// Derive a display label from a node id: "alex_johnson" -> "Alex Johnson".
pub fn derive_label(id: &str) -> String {
    id.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str) -> Node {
        Node::new(id, "", "person")
    }

    #[test]
    fn test_default_graph_is_empty() {
        assert!(KnowledgeGraph::default().is_empty());
        assert!(
            !KnowledgeGraph {
                nodes: vec![person("alice")],
                relationships: vec![],
            }
            .is_empty()
        );
    }

    #[test]
    fn test_label_derived_from_id() {
        let graph = KnowledgeGraph {
            nodes: vec![person("alex_johnson")],
            relationships: vec![],
        }
        .validated();

        assert_eq!(graph.nodes[0].label, "Alex Johnson");
    }

    #[test]
    fn test_explicit_label_preserved() {
        let graph = KnowledgeGraph {
            nodes: vec![Node::new("alex_johnson", "Dr. Alex Johnson", "person")],
            relationships: vec![],
        }
        .validated();

        assert_eq!(graph.nodes[0].label, "Dr. Alex Johnson");
    }

    #[test]
    fn test_semantic_duplicates_collapse_to_first() {
        let graph = KnowledgeGraph {
            nodes: vec![person("alice"), person("bob")],
            relationships: vec![
                Relationship::new("r1", "KNOWS", "alice", "bob"),
                Relationship::new("r2", "KNOWS", "alice", "bob"),
            ],
        }
        .validated();

        assert_eq!(graph.relationships.len(), 1);
        assert_eq!(graph.relationships[0].id, "r1");
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let graph = KnowledgeGraph {
            nodes: vec![person("alice"), person("bob"), person("carol")],
            relationships: vec![
                Relationship::new("r1", "KNOWS", "alice", "bob"),
                Relationship::new("r1", "KNOWS", "alice", "carol"),
            ],
        }
        .validated();

        assert_eq!(graph.relationships.len(), 1);
        assert_eq!(graph.relationships[0].target_node_id, "bob");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let graph = KnowledgeGraph {
            nodes: vec![person("alice"), person("bob")],
            relationships: vec![
                Relationship::new("r1", "KNOWS", "alice", "bob"),
                Relationship::new("r2", "KNOWS", "alice", "bob"),
                Relationship::new("r3", "KNOWS", "alice", "ghost"),
            ],
        }
        .validated();

        let again = graph.clone().validated();
        assert_eq!(graph, again);
    }

    #[test]
    fn test_dangling_endpoints_dropped() {
        let graph = KnowledgeGraph {
            nodes: vec![person("alice")],
            relationships: vec![Relationship::new("r1", "KNOWS", "alice", "nobody")],
        }
        .validated();

        assert!(graph.relationships.is_empty());
        assert_eq!(graph.nodes.len(), 1);
    }

    #[test]
    fn test_endpoints_resolve_after_validation() {
        let graph = KnowledgeGraph {
            nodes: vec![person("alice"), person("bob")],
            relationships: vec![
                Relationship::new("r1", "KNOWS", "alice", "bob"),
                Relationship::new("r2", "KNOWS", "bob", "ghost"),
                Relationship::new("r3", "KNOWS", "ghost", "alice"),
            ],
        }
        .validated();

        for rel in &graph.relationships {
            assert!(graph.node(&rel.source_node_id).is_some());
            assert!(graph.node(&rel.target_node_id).is_some());
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let graph = KnowledgeGraph {
            nodes: vec![person("zeta"), person("alpha"), person("mid")],
            relationships: vec![
                Relationship::new("r1", "A", "zeta", "alpha"),
                Relationship::new("r2", "B", "alpha", "mid"),
            ],
        }
        .validated();

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
        assert_eq!(graph.relationships[0].id, "r1");
    }

    #[test]
    fn test_self_loops_survive_validation() {
        // Self-loops are legal in the data model; the renderer excludes them.
        let graph = KnowledgeGraph {
            nodes: vec![person("alice")],
            relationships: vec![Relationship::new("r1", "KNOWS", "alice", "alice")],
        }
        .validated();

        assert_eq!(graph.relationships.len(), 1);
        assert!(graph.relationships[0].is_self_loop());
    }

    #[test]
    fn test_missing_required_fields_fail_deserialization() {
        let missing_type = r#"{"nodes": [{"id": "alice"}], "relationships": []}"#;
        assert!(serde_json::from_str::<KnowledgeGraph>(missing_type).is_err());

        let missing_target = r#"{
            "nodes": [],
            "relationships": [{"id": "r1", "type": "KNOWS", "source_node_id": "a"}]
        }"#;
        assert!(serde_json::from_str::<KnowledgeGraph>(missing_target).is_err());
    }
}
