//! Analysis orchestration: diameter, per-metric impact and combined scores

pub mod impact;
pub mod summary;

pub use impact::{get_node_removal_impact, NodeRemovalImpact};
pub use summary::GraphInfo;

use crate::centrality::CentralityMetric;
use crate::config::Config;
use crate::data::preprocessing::remove_nodes;
use crate::graph::algorithms::calculate_diameter;
use crate::graph::{Graph, NodeId};
use itertools::Itertools;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use summary::serialize_diameter;

pub const COMBINED_COLUMN: &str = "Combined";
pub const COMBINED_DELTA_COLUMN: &str = "Δ Combined";

/// Diameter before and after removal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiameterInfo {
    #[serde(serialize_with = "serialize_diameter")]
    pub before: f64,
    #[serde(serialize_with = "serialize_diameter")]
    pub after: f64,
}

/// One node's line in the analysis table; `values` is parallel to the
/// table's `columns`
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRow {
    pub node: NodeId,
    pub values: Vec<f64>,
}

/// Flat per-node table: a `(value, delta)` column pair per metric, then the
/// combined value and combined delta
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisTable {
    pub columns: Vec<String>,
    pub rows: Vec<AnalysisRow>,
}

impl AnalysisTable {
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn row(&self, node: &str) -> Option<&AnalysisRow> {
        self.rows.iter().find(|r| r.node == node)
    }

    /// Value at `(node, column)`
    pub fn cell(&self, node: &str, column: &str) -> Option<f64> {
        let col = self.column_index(column)?;
        self.row(node).map(|r| r.values[col])
    }
}

/// Result of one metric on the original and residual graphs
#[derive(Debug, Clone, Serialize)]
pub struct MetricResult {
    pub metric: CentralityMetric,
    pub impact: NodeRemovalImpact,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphInfoPair {
    pub before: GraphInfo,
    pub after: GraphInfo,
}

/// Everything computed for one removal scenario
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub label: String,
    pub removed_nodes: Vec<NodeId>,
    pub metrics: Vec<CentralityMetric>,
    pub diameter: DiameterInfo,
    pub table: AnalysisTable,

    /// Per-node delta summed over all selected metrics
    pub overall_delta: HashMap<NodeId, f64>,

    pub results: Vec<MetricResult>,
    pub graph_info: GraphInfoPair,
}

impl AnalysisReport {
    /// Combined new value per node, as shown in the `Combined` column
    pub fn combined_centrality(&self) -> HashMap<NodeId, f64> {
        self.column_values(COMBINED_COLUMN)
    }

    /// Combined delta per node, as shown in the `Δ Combined` column
    pub fn combined_delta(&self) -> HashMap<NodeId, f64> {
        self.column_values(COMBINED_DELTA_COLUMN)
    }

    fn column_values(&self, column: &str) -> HashMap<NodeId, f64> {
        let Some(col) = self.table.column_index(column) else {
            return HashMap::new();
        };
        self.table
            .rows
            .iter()
            .map(|r| (r.node.clone(), r.values[col]))
            .collect()
    }
}

fn removal_label(removed: &[NodeId]) -> String {
    if removed.is_empty() {
        "All Nodes (No Removal)".to_string()
    } else {
        format!("Removed Nodes: {}", removed.iter().join(", "))
    }
}

/// Run every selected metric against `graph` with `removed` taken out and
/// assemble the report.
///
/// Deltas are summed across metrics, not averaged. Duplicate metrics in the
/// selection are computed once.
pub fn compute_analysis<S: AsRef<str>>(
    graph: &Graph,
    removed: &[S],
    metrics: &[CentralityMetric],
    config: &Config,
) -> AnalysisReport {
    let removed_nodes: Vec<NodeId> = removed.iter().map(|s| s.as_ref().to_string()).collect();
    let metrics: Vec<CentralityMetric> = metrics.iter().copied().unique().collect();

    log::info!(
        "Analyzing graph with {} nodes and {} edges, removing {} nodes",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        removed_nodes.len()
    );

    let residual = remove_nodes(graph, &removed_nodes);
    let diameter = DiameterInfo {
        before: calculate_diameter(graph),
        after: calculate_diameter(&residual),
    };
    log::info!("Diameter before: {}, after: {}", diameter.before, diameter.after);

    let mut overall_delta: HashMap<NodeId, f64> = HashMap::new();
    let mut results = Vec::with_capacity(metrics.len());

    for &metric in &metrics {
        log::info!("Computing {} centrality", metric.label());
        let impact = get_node_removal_impact(graph, &removed_nodes, |g| metric.compute(g, config));

        for (node, d) in &impact.delta {
            *overall_delta.entry(node.clone()).or_insert(0.0) += d;
        }
        results.push(MetricResult { metric, impact });
    }

    let table = build_table(&residual, &results);

    AnalysisReport {
        label: removal_label(&removed_nodes),
        removed_nodes,
        metrics,
        diameter,
        table,
        overall_delta,
        results,
        graph_info: GraphInfoPair {
            before: GraphInfo::compute(graph, Some(diameter.before)),
            after: GraphInfo::compute(&residual, Some(diameter.after)),
        },
    }
}

/// Row order follows the residual graph; nodes only present in some score map
/// come after, sorted by ID.
fn row_nodes(residual: &Graph, results: &[MetricResult]) -> Vec<NodeId> {
    let scored: HashSet<&str> = results
        .iter()
        .flat_map(|r| r.impact.new_centrality.keys().map(String::as_str))
        .collect();

    let mut nodes: Vec<NodeId> = residual
        .node_ids()
        .iter()
        .filter(|id| scored.contains(id.as_str()))
        .cloned()
        .collect();

    let extra = scored
        .iter()
        .filter(|id| !residual.has_node(id))
        .map(|id| id.to_string())
        .sorted();
    nodes.extend(extra);

    nodes
}

fn build_table(residual: &Graph, results: &[MetricResult]) -> AnalysisTable {
    let mut columns = Vec::with_capacity(results.len() * 2 + 2);
    for r in results {
        let title = r.metric.title();
        let delta_title = format!("Δ {title}");
        columns.push(title);
        columns.push(delta_title);
    }
    columns.push(COMBINED_COLUMN.to_string());
    columns.push(COMBINED_DELTA_COLUMN.to_string());

    let deltas: Vec<HashMap<&str, f64>> = results.iter().map(|r| r.impact.delta_map()).collect();

    let rows = row_nodes(residual, results)
        .into_iter()
        .map(|node| {
            let mut values = Vec::with_capacity(columns.len());
            let mut combined = 0.0;
            let mut combined_delta = 0.0;

            for (r, delta) in results.iter().zip(&deltas) {
                let value = r.impact.new_centrality.get(&node).copied();
                let d = delta.get(node.as_str()).copied();

                values.push(value.unwrap_or(f64::NAN));
                values.push(d.unwrap_or(f64::NAN));
                combined += value.unwrap_or(0.0);
                combined_delta += d.unwrap_or(0.0);
            }

            values.push(combined);
            values.push(combined_delta);
            AnalysisRow { node, values }
        })
        .collect();

    AnalysisTable { columns, rows }
}
