//! Watts–Strogatz small-world graphs

use crate::error::{GraphError, Result};
use crate::generators::rng::Mulberry32;
use crate::graph::Graph;
use std::collections::HashSet;

/// Lattice pairs `(near, far)` of a closed ring where every node links to its
/// `half` nearest neighbours on each side. Each unordered pair appears once,
/// in order of `near` then offset.
fn ring_lattice_pairs(size: usize, half: usize) -> Vec<(usize, usize)> {
    let mut seen = HashSet::new();
    let mut pairs = Vec::with_capacity(size * half);

    for i in 0..size {
        for d in 1..=half {
            let j = (i + d) % size;
            if i == j {
                continue;
            }
            if seen.insert((i.min(j), i.max(j))) {
                pairs.push((i, j));
            }
        }
    }

    pairs
}

/// Undirected small-world graph.
///
/// `k` is clamped to `[2, size - 1]` and made even (rounding down). Each
/// lattice edge is visited once; with probability `p` its far endpoint is
/// replaced by a node drawn uniformly among those that are neither the near
/// endpoint nor already adjacent to it. Without such a candidate the lattice
/// edge is kept.
pub fn generate_watts_strogatz(size: usize, k: usize, p: f64, seed: u32) -> Result<Graph> {
    if size == 0 {
        return Err(GraphError::InvalidParameter("size must be positive".into()));
    }

    if size == 1 {
        let mut graph = Graph::undirected();
        graph.add_node(0, Default::default());
        return Ok(graph);
    }

    let mut rng = Mulberry32::new(seed);
    let k_safe = k.min(size - 1).max(2);
    let k_even = if k_safe % 2 == 0 { k_safe } else { k_safe - 1 };
    let half = (k_even / 2).max(1);
    let mut graph = Graph::with_capacity(false, size, size * half);

    for i in 0..size {
        graph.add_node(i, Default::default());
    }

    for (u, v) in ring_lattice_pairs(size, half) {
        if rng.next_f64() >= p {
            graph.add_weighted_edge(u, v, 1.0);
            continue;
        }

        // Node ids are 0..size, so index and id coincide.
        let mut forbidden = vec![false; size];
        forbidden[u] = true;
        for n in graph.out_neighbor_indices(u) {
            forbidden[n] = true;
        }

        let candidates: Vec<usize> = (0..size).filter(|&w| !forbidden[w]).collect();
        if candidates.is_empty() {
            graph.add_weighted_edge(u, v, 1.0);
        } else {
            let new_v = candidates[rng.next_index(candidates.len())];
            graph.add_weighted_edge(u, new_v, 1.0);
        }
    }

    Ok(graph)
}
