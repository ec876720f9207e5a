//! Interactive visualization artifacts for knowledge graphs.
//!
//! Rendering is pure: a [`Visualizer`] consumes a validated graph and
//! produces an in-memory HTML document; persistence belongs to the caller.
//! Malformed graphs never raise — invalid edges are filtered out of the
//! rendered view instead.

mod html;
pub mod palette;
pub mod theme;
mod view;

pub use palette::{COLOR_PALETTE, color_for_type};
pub use theme::{Theme, ThemePalette};

use nodus_core::KnowledgeGraph;

use crate::view::GraphView;

/// Render knowledge graphs as self-contained interactive HTML documents.
#[derive(Debug, Clone, Copy)]
pub struct Visualizer {
    theme: Theme,
    physics_enabled: bool,
    show_isolated: bool,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Visualizer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            physics_enabled: true,
            show_isolated: false,
        }
    }

    /// Toggle the force-directed physics simulation (default: on).
    pub fn with_physics(mut self, enabled: bool) -> Self {
        self.physics_enabled = enabled;
        self
    }

    /// Render nodes that participate in no relationship (default: hidden).
    pub fn with_isolated_nodes(mut self, show: bool) -> Self {
        self.show_isolated = show;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Render the graph as a standalone HTML document.
    ///
    /// Operates on a filtered view: self-loops, edges with missing
    /// endpoints, and (by default) isolated nodes are excluded. The input
    /// graph is not mutated.
    pub fn render(&self, graph: &KnowledgeGraph) -> String {
        let view = GraphView::build(graph, self.show_isolated);
        html::render_document(&view, self.theme, self.physics_enabled)
    }
}

/// Serialize the raw graph (nodes and relationships arrays) as pretty JSON.
///
/// The export reflects the graph as given, without render-time filtering.
pub fn export_json(graph: &KnowledgeGraph) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(graph)
}
