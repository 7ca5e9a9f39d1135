//! Erdős–Rényi G(n, p) random graphs

use crate::error::{GraphError, Result};
use crate::generators::rng::Mulberry32;
use crate::graph::Graph;

/// Undirected G(n, p): each unordered pair `(i, j)` with `i < j` gets an edge
/// with probability `p`, one draw per pair in row-major order.
pub fn generate_erdos_renyi(size: usize, p: f64, seed: u32) -> Result<Graph> {
    if size == 0 {
        return Err(GraphError::InvalidParameter("size must be positive".into()));
    }

    let mut rng = Mulberry32::new(seed);
    let mut graph = Graph::with_capacity(false, size, size);

    for i in 0..size {
        graph.add_node(i, Default::default());
    }

    for i in 0..size {
        for j in (i + 1)..size {
            if rng.next_f64() < p {
                graph.add_weighted_edge(i, j, 1.0);
            }
        }
    }

    Ok(graph)
}
