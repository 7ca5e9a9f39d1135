//! Betweenness centrality (Brandes, 2001)
//!
//! For each source `s` a BFS counts shortest paths `sigma` and records
//! predecessors; dependencies are then accumulated in reverse BFS order:
//!
//! ```text
//! delta(v) += sigma(v) / sigma(w) * (1 + delta(w))   for v in P(w)
//! ```
//!
//! Undirected graphs see every pair from both ends, so scores are halved.
//! With more than two nodes scores are scaled by `1/((n-1)(n-2))` (directed)
//! or `2/((n-1)(n-2))` (undirected).

use crate::centrality::{to_map, CentralityMap};
use crate::graph::Graph;
use std::collections::VecDeque;

/// Shortest-path DAG from one source
struct ShortestPaths {
    sigma: Vec<f64>,
    predecessors: Vec<Vec<usize>>,
    /// Nodes in BFS visiting order
    order: Vec<usize>,
}

fn shortest_paths(graph: &Graph, source: usize) -> ShortestPaths {
    let n = graph.number_of_nodes();
    let mut sigma = vec![0.0_f64; n];
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut predecessors = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);

    sigma[source] = 1.0;
    dist[source] = Some(0);

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let next = dist[v].map_or(0, |d| d + 1);

        for w in graph.out_neighbor_indices(v) {
            if dist[w].is_none() {
                dist[w] = Some(next);
                queue.push_back(w);
            }
            if dist[w] == Some(next) {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    ShortestPaths {
        sigma,
        predecessors,
        order,
    }
}

/// Unweighted betweenness centrality of every node
pub fn betweenness_centrality(graph: &Graph) -> CentralityMap {
    let n = graph.number_of_nodes();
    let mut scores = vec![0.0_f64; n];

    for s in 0..n {
        let paths = shortest_paths(graph, s);
        let mut delta = vec![0.0_f64; n];

        for &w in paths.order.iter().rev() {
            if paths.sigma[w] != 0.0 {
                for &v in &paths.predecessors[w] {
                    delta[v] += paths.sigma[v] / paths.sigma[w] * (1.0 + delta[w]);
                }
            }
            if w != s {
                scores[w] += delta[w];
            }
        }
    }

    if !graph.is_directed() {
        for score in &mut scores {
            *score /= 2.0;
        }
    }

    if n > 2 {
        let pairs = ((n - 1) * (n - 2)) as f64;
        let scale = if graph.is_directed() { 1.0 / pairs } else { 2.0 / pairs };
        for score in &mut scores {
            *score *= scale;
        }
    }

    to_map(graph, scores)
}
