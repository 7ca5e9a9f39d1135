//! Closeness centrality, Wasserman–Faust variant
//!
//! ```text
//! C(v) = (r - 1) / total(v) * (r - 1) / (n - 1)
//! ```
//!
//! where `r` counts the nodes that reach `v` (including itself) and `total(v)`
//! sums their distances. The second factor scales down nodes that only see a
//! small part of a disconnected graph.

use crate::centrality::{to_map, CentralityMap};
use crate::graph::algorithms::{bfs_hops, PARALLEL_THRESHOLD};
use crate::graph::Graph;
use rayon::prelude::*;

fn node_closeness(graph: &Graph, v: usize, use_incoming: bool) -> f64 {
    let n = graph.number_of_nodes();
    let hops = bfs_hops(graph, v, use_incoming);

    let (reachable, total) = hops
        .iter()
        .flatten()
        .fold((0usize, 0usize), |(count, sum), &d| (count + 1, sum + d));

    if total == 0 {
        return 0.0;
    }

    let reached_others = (reachable - 1) as f64;
    (reached_others / total as f64) * (reached_others / (n - 1) as f64)
}

/// Closeness of every node. Directed graphs measure distance *to* the node
/// (incoming edges); isolated nodes score zero.
pub fn closeness_centrality(graph: &Graph) -> CentralityMap {
    let n = graph.number_of_nodes();
    if n <= 1 {
        return to_map(graph, vec![0.0; n]);
    }

    let use_incoming = graph.is_directed();
    let scores: Vec<f64> = if n < PARALLEL_THRESHOLD {
        (0..n).map(|v| node_closeness(graph, v, use_incoming)).collect()
    } else {
        (0..n)
            .into_par_iter()
            .map(|v| node_closeness(graph, v, use_incoming))
            .collect()
    };

    to_map(graph, scores)
}
