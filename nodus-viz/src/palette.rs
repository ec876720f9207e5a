//! Deterministic color assignment for node types.

/// Categorical palette; node types hash onto these.
pub const COLOR_PALETTE: [&str; 15] = [
    "#1f77b4", // blue
    "#ff7f0e", // orange
    "#2ca02c", // green
    "#d62728", // red
    "#9467bd", // purple
    "#8c564b", // brown
    "#e377c2", // pink
    "#7f7f7f", // gray
    "#bcbd22", // olive
    "#17becf", // cyan
    "#aec7e8", // light blue
    "#ffbb78", // light orange
    "#98df8a", // light green
    "#ff9896", // light red
    "#c5b0d5", // light purple
];

/// Stable mapping from a node type to a palette color.
///
/// The same type string always yields the same color, within and across
/// renders and across processes. Case-insensitive: "PERSON" and "person"
/// map identically.
pub fn color_for_type(node_type: &str) -> &'static str {
    let hash = seahash::hash(node_type.to_ascii_lowercase().as_bytes());
    COLOR_PALETTE[(hash % COLOR_PALETTE.len() as u64) as usize]
}
