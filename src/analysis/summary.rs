//! Structural summary of a graph

use crate::components::detection::component_indices;
use crate::graph::algorithms::calculate_diameter;
use crate::graph::Graph;
use serde::{Serialize, Serializer};

/// Serialize a diameter as a number, or as `"inf"` when disconnected
pub(crate) fn serialize_diameter<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str("inf")
    }
}

/// Counts and diameter reported before and after node removal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphInfo {
    pub node_count: usize,
    pub edge_count: usize,
    pub self_loop_count: usize,
    pub component_count: usize,
    #[serde(serialize_with = "serialize_diameter")]
    pub diameter: f64,
}

impl GraphInfo {
    /// Summarize `graph`, reusing an already computed diameter when given
    pub fn compute(graph: &Graph, precomputed_diameter: Option<f64>) -> Self {
        let diameter = precomputed_diameter.unwrap_or_else(|| calculate_diameter(graph));

        Self {
            node_count: graph.number_of_nodes(),
            edge_count: graph.number_of_edges(),
            self_loop_count: graph.self_loop_count(),
            component_count: component_indices(graph).len(),
            diameter,
        }
    }
}
