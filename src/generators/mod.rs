//! Seeded synthetic graph generators

pub mod barabasi_albert;
pub mod erdos_renyi;
pub mod rng;
pub mod watts_strogatz;

pub use barabasi_albert::generate_barabasi_albert;
pub use erdos_renyi::generate_erdos_renyi;
pub use rng::Mulberry32;
pub use watts_strogatz::generate_watts_strogatz;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rewiring probability used by [`make_graph`] for Watts–Strogatz graphs
pub const WATTS_STROGATZ_REWIRE_P: f64 = 0.3;

/// Expected mean degree used by [`make_graph`] for Erdős–Rényi graphs
pub const ERDOS_RENYI_MEAN_DEGREE: f64 = 5.0;

/// Supported random graph models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphType {
    ErdosRenyi,
    BarabasiAlbert,
    WattsStrogatz,
}

impl GraphType {
    pub const ALL: [GraphType; 3] = [
        GraphType::ErdosRenyi,
        GraphType::BarabasiAlbert,
        GraphType::WattsStrogatz,
    ];

    /// Machine name, as accepted by [`FromStr`]
    pub fn key(self) -> &'static str {
        match self {
            GraphType::ErdosRenyi => "erdos_renyi",
            GraphType::BarabasiAlbert => "barabasi_albert",
            GraphType::WattsStrogatz => "watts_strogatz",
        }
    }

    /// Human readable model name
    pub fn display_name(self) -> &'static str {
        match self {
            GraphType::ErdosRenyi => "Erdos-Renyi",
            GraphType::BarabasiAlbert => "Barabasi-Albert",
            GraphType::WattsStrogatz => "Watts-Strogatz",
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GraphType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        GraphType::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| GraphError::InvalidParameter(format!("unsupported graph_type: {s}")))
    }
}

/// Generate a graph of the given model with parameters derived from `size`:
///
/// - Erdős–Rényi with `p = 5 / size`
/// - Barabási–Albert with `m = max(2, size / 50)`
/// - Watts–Strogatz with `k = max(2, size / 50)` rounded up to even, `p = 0.3`
pub fn make_graph(graph_type: GraphType, size: usize, seed: u32) -> Result<Graph> {
    if size == 0 {
        return Err(GraphError::InvalidParameter("size must be positive".into()));
    }

    log::info!(
        "Generating {} graph with {} nodes (seed {})",
        graph_type.display_name(),
        size,
        seed
    );

    let graph = match graph_type {
        GraphType::ErdosRenyi => {
            let p = ERDOS_RENYI_MEAN_DEGREE / size as f64;
            generate_erdos_renyi(size, p, seed)?
        }
        GraphType::BarabasiAlbert => {
            let m = (size / 50).max(2);
            generate_barabasi_albert(size, m, seed)?
        }
        GraphType::WattsStrogatz => {
            let k_base = (size / 50).max(2);
            let k = if k_base % 2 == 0 { k_base } else { k_base + 1 };
            generate_watts_strogatz(size, k, WATTS_STROGATZ_REWIRE_P, seed)?
        }
    };

    log::debug!(
        "Generated graph with {} nodes and {} edges",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    Ok(graph)
}
