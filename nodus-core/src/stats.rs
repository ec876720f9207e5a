//! Summary statistics over an extracted graph.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::KnowledgeGraph;

/// Counts and distributions for one knowledge graph.
///
/// Distributions are keyed through a `BTreeMap` so output ordering is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub relationship_count: usize,
    /// Number of distinct relationship types.
    pub relationship_type_count: usize,
    pub nodes_by_type: BTreeMap<String, usize>,
    pub relationships_by_type: BTreeMap<String, usize>,
}

impl GraphStats {
    pub fn for_graph(graph: &KnowledgeGraph) -> Self {
        let mut nodes_by_type: BTreeMap<String, usize> = BTreeMap::new();
        for node in &graph.nodes {
            *nodes_by_type.entry(node.node_type.clone()).or_default() += 1;
        }

        let mut relationships_by_type: BTreeMap<String, usize> = BTreeMap::new();
        for rel in &graph.relationships {
            *relationships_by_type
                .entry(rel.rel_type.clone())
                .or_default() += 1;
        }

        Self {
            node_count: graph.nodes.len(),
            relationship_count: graph.relationships.len(),
            relationship_type_count: relationships_by_type.len(),
            nodes_by_type,
            relationships_by_type,
        }
    }
}

impl std::fmt::Display for GraphStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Nodes: {}", self.node_count)?;
        writeln!(f, "Relationships: {}", self.relationship_count)?;
        writeln!(f, "Relationship types: {}", self.relationship_type_count)?;

        writeln!(f, "Node types:")?;
        for (node_type, count) in &self.nodes_by_type {
            writeln!(f, "  {node_type}: {count}")?;
        }

        writeln!(f, "Relationship types:")?;
        for (rel_type, count) in &self.relationships_by_type {
            writeln!(f, "  {rel_type}: {count}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, Relationship};

    fn sample_graph() -> KnowledgeGraph {
        KnowledgeGraph {
            nodes: vec![
                Node::new("alice", "Alice", "person"),
                Node::new("bob", "Bob", "person"),
                Node::new("techcorp", "TechCorp", "organization"),
            ],
            relationships: vec![
                Relationship::new("r1", "WORKS_AT", "alice", "techcorp"),
                Relationship::new("r2", "WORKS_AT", "bob", "techcorp"),
                Relationship::new("r3", "KNOWS", "alice", "bob"),
            ],
        }
    }

    #[test]
    fn test_counts() {
        let stats = GraphStats::for_graph(&sample_graph());
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.relationship_count, 3);
        assert_eq!(stats.relationship_type_count, 2);
    }

    #[test]
    fn test_distributions() {
        let stats = GraphStats::for_graph(&sample_graph());
        assert_eq!(stats.nodes_by_type["person"], 2);
        assert_eq!(stats.nodes_by_type["organization"], 1);
        assert_eq!(stats.relationships_by_type["WORKS_AT"], 2);
        assert_eq!(stats.relationships_by_type["KNOWS"], 1);
    }

    #[test]
    fn test_empty_graph() {
        let stats = GraphStats::for_graph(&KnowledgeGraph::default());
        assert_eq!(stats, GraphStats::default());
    }
}
