//! Core library functions for the graph impact analyzer
//!
//! An in-memory attributed graph, seeded random graph generators, connectivity
//! and centrality measures, and node-removal impact analysis.

pub mod analysis;
pub mod centrality;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod generators;
pub mod graph;
pub mod storage;
pub mod viz;

pub use analysis::{compute_analysis, get_node_removal_impact, AnalysisReport, NodeRemovalImpact};
pub use centrality::{CentralityMap, CentralityMetric};
pub use config::Config;
pub use error::{GraphError, Result};
pub use generators::{make_graph, GraphType};
pub use graph::{Attributes, Edge, Graph, NodeId};
