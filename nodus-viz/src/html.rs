//! Self-contained HTML artifact generation.
//!
//! The artifact is one document embedding the node/edge datasets and a
//! vis-network setup script; it renders standalone in any browser with no
//! further I/O from this crate.

use serde_json::{Value, json};

use crate::palette::color_for_type;
use crate::theme::Theme;
use crate::view::GraphView;

const VIS_NETWORK_CDN: &str =
    "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";

/// "WORKS_AT" -> "Works At".
pub(crate) fn title_case(raw: &str) -> String {
    raw.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let lower = part.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Readable tooltip for a relationship edge.
pub(crate) fn relationship_tooltip(rel_type: &str, source: &str, target: &str) -> String {
    format!("{source} \u{2192} {} \u{2192} {target}", title_case(rel_type))
}

fn node_dataset(view: &GraphView<'_>, theme: Theme) -> Value {
    let palette = theme.palette();

    let nodes: Vec<Value> = view
        .nodes
        .iter()
        .map(|node| {
            let label = view.display_label(node);
            json!({
                "id": node.id,
                "label": label,
                "title": format!("{label}\nType: {}\nID: {}", node.node_type, node.id),
                "color": color_for_type(&node.node_type),
                "size": 30,
                "font": {"size": 14, "color": palette.font_color},
            })
        })
        .collect();

    Value::Array(nodes)
}

fn edge_dataset(view: &GraphView<'_>, theme: Theme) -> Value {
    let palette = theme.palette();

    let edges: Vec<Value> = view
        .edges
        .iter()
        .map(|rel| {
            let source_label = view
                .node(&rel.source_node_id)
                .map(|n| view.display_label(n))
                .unwrap_or_else(|| rel.source_node_id.clone());
            let target_label = view
                .node(&rel.target_node_id)
                .map(|n| view.display_label(n))
                .unwrap_or_else(|| rel.target_node_id.clone());

            json!({
                "from": rel.source_node_id,
                "to": rel.target_node_id,
                "label": title_case(&rel.rel_type),
                "title": relationship_tooltip(&rel.rel_type, &source_label, &target_label),
                "width": 2,
                "font": {
                    "size": 12,
                    "color": palette.font_color,
                    "strokeWidth": 2,
                    "strokeColor": palette.edge_font_stroke,
                },
                "arrows": {"to": {"enabled": true, "scaleFactor": 1.2}},
            })
        })
        .collect();

    Value::Array(edges)
}

fn network_options(physics_enabled: bool) -> Value {
    let mut options = json!({
        "interaction": {
            "hover": true,
            "tooltipDelay": 300,
            "hideEdgesOnDrag": true
        },
        "nodes": {
            "borderWidth": 2,
            "borderWidthSelected": 4
        },
        "edges": {
            "smooth": {
                "type": "dynamic",
                "roundness": 1
            }
        }
    });

    options["physics"] = if physics_enabled {
        json!({
            "forceAtlas2Based": {
                "gravitationalConstant": -100,
                "centralGravity": 0.005,
                "springLength": 150,
                "springConstant": 0.08,
                "damping": 0.4
            },
            "minVelocity": 0.75,
            "solver": "forceAtlas2Based",
            "stabilization": {"iterations": 100}
        })
    } else {
        json!({"enabled": false})
    };

    options
}

/// Keep `</script>` sequences inert when the JSON lands inside an inline
/// script element.
fn script_safe(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

pub(crate) fn render_document(view: &GraphView<'_>, theme: Theme, physics_enabled: bool) -> String {
    let palette = theme.palette();
    let nodes = script_safe(&node_dataset(view, theme));
    let edges = script_safe(&edge_dataset(view, theme));
    let options = script_safe(&network_options(physics_enabled));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Knowledge Graph</title>
<script src="{VIS_NETWORK_CDN}"></script>
<style>
  html, body {{ margin: 0; padding: 0; background: {background}; }}
  #graph {{ width: 100%; height: 100vh; }}
</style>
</head>
<body>
<div id="graph"></div>
<script>
  const nodes = new vis.DataSet({nodes});
  const edges = new vis.DataSet({edges});
  const container = document.getElementById("graph");
  const network = new vis.Network(container, {{ nodes: nodes, edges: edges }}, {options});
</script>
</body>
</html>
"#,
        background = palette.background,
    )
}
