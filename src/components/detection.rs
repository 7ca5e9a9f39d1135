//! Component detection by repeated breadth-first search

use crate::graph::algorithms::weak_neighbor_indices;
use crate::graph::{Graph, NodeId};
use std::collections::{HashSet, VecDeque};

/// Component membership by node index, components in discovery order
pub(crate) fn component_indices(graph: &Graph) -> Vec<Vec<usize>> {
    let n = graph.number_of_nodes();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }

        let mut members = Vec::new();
        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(v) = queue.pop_front() {
            members.push(v);
            for w in weak_neighbor_indices(graph, v) {
                if !visited[w] {
                    visited[w] = true;
                    queue.push_back(w);
                }
            }
        }

        components.push(members);
    }

    components
}

/// Weak connected components (edge direction ignored).
///
/// Every node belongs to exactly one component. Components are listed in the
/// order their first node appears in the graph.
pub fn get_connected_components(graph: &Graph) -> Vec<HashSet<NodeId>> {
    component_indices(graph)
        .into_iter()
        .map(|members| {
            members
                .into_iter()
                .map(|idx| graph.node_id(idx).to_string())
                .collect()
        })
        .collect()
}

/// Members of the largest weak component; the earliest one wins ties.
/// Empty for an empty graph.
pub fn largest_component(graph: &Graph) -> HashSet<NodeId> {
    let mut largest: Option<HashSet<NodeId>> = None;
    for component in get_connected_components(graph) {
        if largest.as_ref().map_or(true, |l| component.len() > l.len()) {
            largest = Some(component);
        }
    }
    largest.unwrap_or_default()
}
