//! Barabási–Albert preferential attachment graphs

use crate::error::{GraphError, Result};
use crate::generators::rng::Mulberry32;
use crate::graph::Graph;

/// Undirected preferential-attachment graph.
///
/// Starts from a complete graph on `m_init = clamp(m, 2, size - 1)` nodes. Each
/// later node attaches to up to `m_init` distinct existing nodes, sampled with
/// probability proportional to `max(1, degree)`. Sampling repeats until enough
/// distinct targets are found or every existing node has been picked, so the
/// attachment count is best-effort rather than exactly `m`.
pub fn generate_barabasi_albert(size: usize, m: usize, seed: u32) -> Result<Graph> {
    if size == 0 {
        return Err(GraphError::InvalidParameter("size must be positive".into()));
    }

    if size == 1 {
        let mut graph = Graph::undirected();
        graph.add_node(0, Default::default());
        return Ok(graph);
    }

    let mut rng = Mulberry32::new(seed);
    let m_init = m.max(2).min(size - 1);
    let mut graph = Graph::with_capacity(false, size, size * m_init);
    for i in 0..m_init {
        graph.add_node(i, Default::default());
    }
    for i in 0..m_init {
        for j in (i + 1)..m_init {
            graph.add_weighted_edge(i, j, 1.0);
        }
    }

    // Node ids are inserted as 0..size, so id `v` sits at index `v`.
    let weight = |g: &Graph, v: usize| g.degree_at(v).max(1) as f64;

    for new_node in m_init..size {
        graph.add_node(new_node, Default::default());

        let wanted = m_init.min(new_node);
        let mut targets: Vec<usize> = Vec::with_capacity(wanted);

        while targets.len() < wanted {
            let degree_sum: f64 = (0..new_node).map(|v| weight(&graph, v)).sum();

            let mut r = rng.next_f64() * degree_sum;
            let mut selected = None;
            for v in 0..new_node {
                r -= weight(&graph, v);
                if r <= 0.0 {
                    selected = Some(v);
                    break;
                }
            }

            if let Some(v) = selected {
                if !targets.contains(&v) {
                    targets.push(v);
                }
            }
            if targets.len() >= new_node {
                break;
            }
        }

        for target in targets {
            graph.add_weighted_edge(new_node, target, 1.0);
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_clique_and_growth() {
        let g = generate_barabasi_albert(20, 3, 9).unwrap();
        assert_eq!(g.number_of_nodes(), 20);

        // 3-clique plus three attachments for each of the remaining 17 nodes
        assert_eq!(g.number_of_edges(), 3 + 17 * 3);
        for id in g.node_ids() {
            assert!(g.degree(id) >= 2);
        }
    }

    #[test]
    fn tiny_sizes() {
        let one = generate_barabasi_albert(1, 5, 0).unwrap();
        assert_eq!(one.number_of_nodes(), 1);
        assert_eq!(one.number_of_edges(), 0);

        // m_init clamps to size - 1
        let two = generate_barabasi_albert(2, 5, 0).unwrap();
        assert_eq!(two.number_of_nodes(), 2);
        assert_eq!(two.number_of_edges(), 1);
    }

    #[test]
    fn oversized_m_clamps_to_complete_seed() {
        let g = generate_barabasi_albert(10, usize::MAX, 1).unwrap();
        assert_eq!(g.number_of_nodes(), 10);

        // K9 seed, then node 9 attaches to all nine
        assert_eq!(g.number_of_edges(), 45);
        assert_eq!(g.degree("9"), 9);
    }
}
