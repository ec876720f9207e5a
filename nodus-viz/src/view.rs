//! Render-ready filtered view over a knowledge graph.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use nodus_core::graph::{KnowledgeGraph, Node, Relationship, derive_label};

/// A filtered, borrowed view of a graph. The input graph is never mutated.
///
/// Excluded: self-referencing relationships, relationships with an endpoint
/// that names no node, and (unless `show_isolated`) nodes that participate
/// in no surviving relationship.
pub(crate) struct GraphView<'a> {
    pub nodes: Vec<&'a Node>,
    pub edges: Vec<&'a Relationship>,
    index: HashMap<&'a str, &'a Node>,
}

impl<'a> GraphView<'a> {
    pub fn build(graph: &'a KnowledgeGraph, show_isolated: bool) -> Self {
        let mut index: HashMap<&str, &Node> = HashMap::new();
        for node in &graph.nodes {
            index.entry(node.id.as_str()).or_insert(node);
        }

        let edges: Vec<&Relationship> = graph
            .relationships
            .iter()
            .filter(|rel| {
                !rel.is_self_loop()
                    && index.contains_key(rel.source_node_id.as_str())
                    && index.contains_key(rel.target_node_id.as_str())
            })
            .collect();

        let connected: HashSet<&str> = edges
            .iter()
            .flat_map(|rel| [rel.source_node_id.as_str(), rel.target_node_id.as_str()])
            .collect();

        let nodes: Vec<&Node> = graph
            .nodes
            .iter()
            .filter(|node| show_isolated || connected.contains(node.id.as_str()))
            .collect();

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            filtered_edges = graph.relationships.len() - edges.len(),
            "built graph view"
        );

        Self {
            nodes,
            edges,
            index,
        }
    }

    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.index.get(id).copied()
    }

    /// Display label, deriving from the id when the label is blank.
    pub fn display_label(&self, node: &Node) -> String {
        if node.label.trim().is_empty() {
            derive_label(&node.id)
        } else {
            node.label.clone()
        }
    }
}
