//! Node-removal impact on a centrality measure

use crate::centrality::CentralityMap;
use crate::data::preprocessing::remove_nodes;
use crate::graph::{Graph, NodeId};
use itertools::Itertools;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Centrality after removal and the per-node change it caused
#[derive(Debug, Clone, Serialize)]
pub struct NodeRemovalImpact {
    /// Scores on the residual graph (on the original graph if nothing was removed)
    pub new_centrality: CentralityMap,

    /// `new - old` for each surviving node, largest first
    pub delta: Vec<(NodeId, f64)>,
}

impl NodeRemovalImpact {
    /// Delta keyed by node
    pub fn delta_map(&self) -> HashMap<&str, f64> {
        self.delta.iter().map(|(id, d)| (id.as_str(), *d)).collect()
    }
}

/// Compare `centrality_fn` on `graph` against the graph with `removed` deleted.
///
/// Removed nodes get no delta. Survivors missing from the residual scores are
/// treated as scoring zero. With an empty removal set the baseline is returned
/// unchanged and every delta is zero.
pub fn get_node_removal_impact<S, F>(graph: &Graph, removed: &[S], centrality_fn: F) -> NodeRemovalImpact
where
    S: AsRef<str>,
    F: Fn(&Graph) -> CentralityMap,
{
    let baseline = centrality_fn(graph);

    if removed.is_empty() {
        let delta = graph
            .node_ids()
            .iter()
            .filter(|id| baseline.contains_key(id.as_str()))
            .map(|id| (id.clone(), 0.0))
            .collect();
        return NodeRemovalImpact {
            new_centrality: baseline,
            delta,
        };
    }

    let residual = remove_nodes(graph, removed);
    let new_centrality = centrality_fn(&residual);

    let removed_set: HashSet<&str> = removed.iter().map(|s| s.as_ref()).collect();
    let delta = graph
        .node_ids()
        .iter()
        .filter(|id| !removed_set.contains(id.as_str()))
        .filter_map(|id| {
            let old = *baseline.get(id)?;
            let new = new_centrality.get(id).copied().unwrap_or(0.0);
            Some((id.clone(), new - old))
        })
        .sorted_by(|a, b| b.1.total_cmp(&a.1))
        .collect();

    NodeRemovalImpact {
        new_centrality,
        delta,
    }
}
