//! Traversal, connectivity and distance algorithms

use crate::graph::{Graph, NodeId};
use rayon::prelude::*;
use std::collections::{HashMap, VecDeque};

/// Below this node count per-source BFS sweeps run sequentially
pub(crate) const PARALLEL_THRESHOLD: usize = 1000;

/// Unweighted BFS from a node index. `hops[v]` is `None` when `v` is unreachable.
pub(crate) fn bfs_hops(graph: &Graph, source: usize, use_incoming: bool) -> Vec<Option<usize>> {
    let mut hops = vec![None; graph.number_of_nodes()];
    hops[source] = Some(0);

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let next = hops[v].map_or(0, |d| d + 1);
        if use_incoming {
            for w in graph.in_neighbor_indices(v) {
                if hops[w].is_none() {
                    hops[w] = Some(next);
                    queue.push_back(w);
                }
            }
        } else {
            for w in graph.out_neighbor_indices(v) {
                if hops[w].is_none() {
                    hops[w] = Some(next);
                    queue.push_back(w);
                }
            }
        }
    }

    hops
}

/// Hop counts from `source` to every reachable node, following incoming edges
/// when `use_incoming` is set. Unreached nodes are absent; an unknown source
/// yields an empty map.
pub fn bfs_distances(graph: &Graph, source: &str, use_incoming: bool) -> HashMap<NodeId, usize> {
    let Some(src) = graph.node_index(source) else {
        return HashMap::new();
    };

    bfs_hops(graph, src, use_incoming)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, d)| d.map(|d| (graph.node_id(idx).to_string(), d)))
        .collect()
}

/// Neighbors ignoring edge direction, without duplicates for directed graphs
pub(crate) fn weak_neighbor_indices(graph: &Graph, idx: usize) -> Vec<usize> {
    if !graph.is_directed() {
        return graph.out_neighbor_indices(idx).collect();
    }

    let mut out: Vec<usize> = Vec::new();
    for n in graph.out_neighbor_indices(idx).chain(graph.in_neighbor_indices(idx)) {
        if !out.contains(&n) {
            out.push(n);
        }
    }
    out
}

/// Neighbors ignoring edge direction
pub fn weak_neighbors<'a>(graph: &'a Graph, node: &str) -> Vec<&'a str> {
    graph.node_index(node).map_or_else(Vec::new, |idx| {
        weak_neighbor_indices(graph, idx)
            .into_iter()
            .map(|n| graph.node_id(n))
            .collect()
    })
}

fn reaches_all(hops: &[Option<usize>]) -> bool {
    hops.iter().all(Option::is_some)
}

/// Whether every node is reachable from the first node over neighbor lists
pub fn is_connected_undirected(graph: &Graph) -> bool {
    if graph.number_of_nodes() <= 1 {
        return true;
    }
    reaches_all(&bfs_hops(graph, 0, false))
}

/// Whether the first node reaches every node and is reached by every node
pub fn is_strongly_connected(graph: &Graph) -> bool {
    if graph.number_of_nodes() <= 1 {
        return true;
    }
    reaches_all(&bfs_hops(graph, 0, false)) && reaches_all(&bfs_hops(graph, 0, true))
}

fn eccentricity(graph: &Graph, source: usize) -> usize {
    bfs_hops(graph, source, false)
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0)
}

/// Largest shortest-path distance between any two nodes.
///
/// Returns `0.0` for graphs with at most one node and `f64::INFINITY` when the
/// graph is disconnected (strongly, for directed graphs).
pub fn calculate_diameter(graph: &Graph) -> f64 {
    let n = graph.number_of_nodes();
    if n <= 1 {
        return 0.0;
    }

    let connected = if graph.is_directed() {
        is_strongly_connected(graph)
    } else {
        is_connected_undirected(graph)
    };
    if !connected {
        return f64::INFINITY;
    }

    let diameter = if n < PARALLEL_THRESHOLD {
        (0..n).map(|v| eccentricity(graph, v)).max()
    } else {
        log::debug!("Computing eccentricities of {} nodes in parallel", n);
        (0..n).into_par_iter().map(|v| eccentricity(graph, v)).max()
    };

    diameter.unwrap_or(0) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[&str]) -> Graph {
        let mut g = Graph::undirected();
        for pair in ids.windows(2) {
            g.add_weighted_edge(pair[0], pair[1], 1.0);
        }
        g
    }

    #[test]
    fn bfs_distances_on_path() {
        let g = path(&["a", "b", "c", "d"]);
        let dist = bfs_distances(&g, "b", false);

        assert_eq!(dist.len(), 4);
        assert_eq!(dist["a"], 1);
        assert_eq!(dist["d"], 2);
    }

    #[test]
    fn bfs_distances_respects_direction() {
        let mut g = Graph::directed();
        g.add_weighted_edge("a", "b", 1.0);
        g.add_weighted_edge("b", "c", 1.0);

        let forward = bfs_distances(&g, "c", false);
        assert_eq!(forward.len(), 1);

        let backward = bfs_distances(&g, "c", true);
        assert_eq!(backward["a"], 2);
        assert!(bfs_distances(&g, "missing", false).is_empty());
    }

    #[test]
    fn strong_connectivity_needs_both_directions() {
        let mut g = Graph::directed();
        g.add_weighted_edge("a", "b", 1.0);
        g.add_weighted_edge("b", "c", 1.0);
        assert!(!is_strongly_connected(&g));
        assert_eq!(calculate_diameter(&g), f64::INFINITY);

        g.add_weighted_edge("c", "a", 1.0);
        assert!(is_strongly_connected(&g));
        assert_eq!(calculate_diameter(&g), 2.0);
    }

    #[test]
    fn diameter_of_path_and_trivial_graphs() {
        assert_eq!(calculate_diameter(&path(&["a", "b", "c", "d"])), 3.0);
        assert_eq!(calculate_diameter(&Graph::undirected()), 0.0);

        let mut single = Graph::undirected();
        single.add_node("only", Default::default());
        assert_eq!(calculate_diameter(&single), 0.0);
    }

    #[test]
    fn weak_neighbors_merge_directions() {
        let mut g = Graph::directed();
        g.add_weighted_edge("a", "b", 1.0);
        g.add_weighted_edge("b", "a", 1.0);
        g.add_weighted_edge("c", "b", 1.0);

        assert_eq!(weak_neighbors(&g, "b"), vec!["a", "c"]);
    }
}
