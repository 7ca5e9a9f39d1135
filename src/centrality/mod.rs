//! Centrality engine
//!
//! Every measure is a pure function of a [`Graph`] and returns a score for
//! each of its nodes.

pub mod betweenness;
pub mod closeness;
pub mod degree;
pub mod spectral;

pub use betweenness::betweenness_centrality;
pub use closeness::closeness_centrality;
pub use degree::{degree_centrality, unnormalized_degree_centrality};
pub use spectral::{eigenvector_centrality, estimate_spectral_radius, katz_centrality};

use crate::config::Config;
use crate::error::GraphError;
use crate::graph::{Graph, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Score per node
pub type CentralityMap = HashMap<NodeId, f64>;

/// Attach node IDs to positional scores
pub(crate) fn to_map(graph: &Graph, scores: Vec<f64>) -> CentralityMap {
    graph
        .node_ids()
        .iter()
        .cloned()
        .zip(scores)
        .collect()
}

/// Selectable centrality measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentralityMetric {
    Degree,
    UnnormalizedDegree,
    Betweenness,
    Closeness,
    Eigenvector,
    Katz,
}

impl CentralityMetric {
    pub const ALL: [CentralityMetric; 6] = [
        CentralityMetric::Degree,
        CentralityMetric::UnnormalizedDegree,
        CentralityMetric::Betweenness,
        CentralityMetric::Closeness,
        CentralityMetric::Eigenvector,
        CentralityMetric::Katz,
    ];

    /// Selection used when the caller does not choose
    pub const DEFAULT_SELECTION: [CentralityMetric; 3] = [
        CentralityMetric::Degree,
        CentralityMetric::Betweenness,
        CentralityMetric::Closeness,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CentralityMetric::Degree => "degree",
            CentralityMetric::UnnormalizedDegree => "unnormalized_degree",
            CentralityMetric::Betweenness => "betweenness",
            CentralityMetric::Closeness => "closeness",
            CentralityMetric::Eigenvector => "eigenvector",
            CentralityMetric::Katz => "katz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CentralityMetric::Degree => "Degree (Normalized)",
            CentralityMetric::UnnormalizedDegree => "Degree (Unnormalized)",
            CentralityMetric::Betweenness => "Betweenness",
            CentralityMetric::Closeness => "Closeness",
            CentralityMetric::Eigenvector => "Eigenvector",
            CentralityMetric::Katz => "Katz",
        }
    }

    /// Column title in analysis tables, e.g. `Unnormalized_Degree`
    pub fn title(self) -> String {
        title_case(self.key())
    }

    /// Run this measure on `graph`
    pub fn compute(self, graph: &Graph, config: &Config) -> CentralityMap {
        match self {
            CentralityMetric::Degree => degree_centrality(graph),
            CentralityMetric::UnnormalizedDegree => unnormalized_degree_centrality(graph),
            CentralityMetric::Betweenness => betweenness_centrality(graph),
            CentralityMetric::Closeness => closeness_centrality(graph),
            CentralityMetric::Eigenvector => {
                eigenvector_centrality(graph, config.eigenvector_max_iter, config.eigenvector_tol)
            }
            CentralityMetric::Katz => katz_centrality(graph, config.katz_max_iter, config.katz_tol),
        }
    }
}

impl fmt::Display for CentralityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CentralityMetric {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CentralityMetric::ALL
            .into_iter()
            .find(|m| m.key() == wanted)
            .ok_or_else(|| GraphError::UnknownMetric(s.to_string()))
    }
}

/// Lower-case the input, then upper-case every letter that starts the string
/// or follows a non-letter
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphabetic() && !prev_is_letter {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_letter = c.is_ascii_alphabetic();
    }
    out
}
