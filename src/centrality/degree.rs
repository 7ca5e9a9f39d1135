//! Degree centrality

use crate::centrality::{to_map, CentralityMap};
use crate::graph::Graph;

/// Degree divided by `n - 1`; all zeros for graphs with at most one node
pub fn degree_centrality(graph: &Graph) -> CentralityMap {
    let n = graph.number_of_nodes();
    let scale = if n <= 1 { 0.0 } else { 1.0 / (n - 1) as f64 };
    let scores = (0..n).map(|v| graph.degree_at(v) as f64 * scale).collect();
    to_map(graph, scores)
}

/// Raw degree
pub fn unnormalized_degree_centrality(graph: &Graph) -> CentralityMap {
    let scores = (0..graph.number_of_nodes())
        .map(|v| graph.degree_at(v) as f64)
        .collect();
    to_map(graph, scores)
}
