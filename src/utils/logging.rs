use digraph::{path_weight, Edge, Weight};
use itertools::Itertools;

fn format_log_weight<W: Weight>(edges: &[Edge<W>]) -> String {
    match path_weight(edges) {
        Ok(w) => w.to_string(),
        Err(_) => "overflow".to_string(),
    }
}

/// `0 -> 1 -> 2 (cost 3)`, or `-` for an empty path.
pub fn format_log_path<W: Weight>(path: &[Edge<W>]) -> String {
    match path.first() {
        None => "-".to_string(),
        Some(first) => format!(
            "{} -> {} (cost {})",
            first.from,
            path.iter().map(|edge| edge.to).join(" -> "),
            format_log_weight(path),
        ),
    }
}

/// `{0-1, 1-2} (2 edges, weight 3)`
pub fn format_log_forest<'a, W: Weight + 'a>(
    edges: impl IntoIterator<Item = &'a Edge<W>>,
) -> String {
    let edges = edges.into_iter().cloned().collect_vec();
    format!(
        "{{{}}} ({} edges, weight {})",
        edges
            .iter()
            .map(|edge| format!("{}-{}", edge.from, edge.to))
            .join(", "),
        edges.len(),
        format_log_weight(&edges),
    )
}
