//! Data preprocessing module for graph analysis

use crate::components::largest_component;
use crate::config::Config;
use crate::graph::{Attributes, Graph, NodeId};
use std::collections::HashSet;

/// Copy the nodes accepted by `keep` and every edge whose endpoints are both kept.
/// Node order, attributes and edge order follow the source graph.
fn filter_nodes<F>(graph: &Graph, keep: F) -> Graph
where
    F: Fn(&str) -> bool,
{
    let mut out = Graph::with_capacity(
        graph.is_directed(),
        graph.number_of_nodes(),
        graph.number_of_edges(),
    );

    for id in graph.node_ids() {
        if keep(id.as_str()) {
            let attrs = graph.node_attrs(id).cloned().unwrap_or_default();
            out.add_node(id, attrs);
        }
    }

    for edge in graph.edges() {
        if keep(edge.source.as_str()) && keep(edge.target.as_str()) {
            let mut attrs: Attributes = edge.attrs.clone();
            attrs.insert("weight", edge.weight);
            out.add_edge(&edge.source, &edge.target, attrs);
        }
    }

    out
}

/// Extract the subgraph induced by `nodes_to_keep`.
///
/// IDs that are not in the graph are ignored. The source graph is untouched.
pub fn induced_subgraph<S: AsRef<str>>(graph: &Graph, nodes_to_keep: &[S]) -> Graph {
    let keep: HashSet<&str> = nodes_to_keep.iter().map(|s| s.as_ref()).collect();
    filter_nodes(graph, |id| keep.contains(id))
}

/// Copy of `graph` without `nodes_to_remove` and without their incident edges
pub fn remove_nodes<S: AsRef<str>>(graph: &Graph, nodes_to_remove: &[S]) -> Graph {
    let remove: HashSet<&str> = nodes_to_remove.iter().map(|s| s.as_ref()).collect();
    filter_nodes(graph, |id| !remove.contains(id))
}

/// Drop isolated nodes
pub fn filter_zero_degree(graph: &Graph) -> Graph {
    filter_nodes(graph, |id| graph.degree(id) != 0)
}

/// Restrict to the largest weak component
pub fn keep_largest_component(graph: &Graph) -> Graph {
    if graph.number_of_nodes() == 0 {
        return graph.copy();
    }
    let largest = largest_component(graph);
    filter_nodes(graph, |id| largest.contains(id))
}

/// Apply the preprocessing steps enabled in `config`: zero-degree pruning
/// first, then largest-component extraction.
pub fn process_graph(graph: &Graph, config: &Config) -> Graph {
    let mut processed = graph.copy();

    if config.remove_zero_degree {
        processed = filter_zero_degree(&processed);
        log::debug!(
            "Removed zero-degree nodes, {} nodes remain",
            processed.number_of_nodes()
        );
    }

    if config.use_largest_component {
        processed = keep_largest_component(&processed);
        log::debug!(
            "Kept largest component with {} nodes",
            processed.number_of_nodes()
        );
    }

    processed
}

/// Parse a comma separated node list, trimming blanks and dropping empties
pub fn parse_node_list(raw: &str) -> Vec<NodeId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
