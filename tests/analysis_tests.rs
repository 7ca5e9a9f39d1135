//! End-to-end checks of the analysis pipeline on small hand-built graphs

use approx::assert_abs_diff_eq;
use graph_impact_analyzer::centrality::{
    betweenness_centrality, closeness_centrality, degree_centrality, unnormalized_degree_centrality,
};
use graph_impact_analyzer::graph::algorithms::calculate_diameter;
use graph_impact_analyzer::{
    compute_analysis, get_node_removal_impact, make_graph, CentralityMetric, Config, Graph, GraphType,
};
use std::collections::HashSet;

const NO_REMOVAL: &[&str] = &[];

fn triangle() -> Graph {
    let mut g = Graph::undirected();
    g.add_weighted_edge("A", "B", 1.0);
    g.add_weighted_edge("B", "C", 1.0);
    g.add_weighted_edge("C", "A", 1.0);
    g
}

fn star(leaves: usize) -> Graph {
    let mut g = Graph::undirected();
    for i in 1..=leaves {
        g.add_weighted_edge("O", format!("L{i}"), 1.0);
    }
    g
}

#[test]
fn triangle_scores() {
    let g = triangle();
    let degree = degree_centrality(&g);
    let betweenness = betweenness_centrality(&g);
    let closeness = closeness_centrality(&g);

    for id in ["A", "B", "C"] {
        assert_abs_diff_eq!(degree[id], 1.0);
        assert_abs_diff_eq!(betweenness[id], 0.0);
        assert_abs_diff_eq!(closeness[id], 1.0);
    }
}

#[test]
fn path_betweenness() {
    let mut g = Graph::undirected();
    g.add_weighted_edge("A", "B", 1.0);
    g.add_weighted_edge("B", "C", 1.0);

    let scores = betweenness_centrality(&g);
    assert_abs_diff_eq!(scores["B"], 1.0);
    assert_abs_diff_eq!(scores["A"], 0.0);
    assert_abs_diff_eq!(scores["C"], 0.0);
}

#[test]
fn disjoint_edges_have_infinite_diameter() {
    let mut g = Graph::undirected();
    g.add_weighted_edge("A", "B", 1.0);
    g.add_weighted_edge("C", "D", 1.0);

    assert_eq!(calculate_diameter(&g), f64::INFINITY);

    let report = compute_analysis(&g, NO_REMOVAL, &[CentralityMetric::Degree], &Config::default());
    assert_eq!(report.diameter.before, f64::INFINITY);
    assert_eq!(report.diameter.after, f64::INFINITY);
}

#[test]
fn reinserted_edge_keeps_single_copy() {
    let mut g = Graph::undirected();
    g.add_weighted_edge("A", "B", 1.0);
    g.add_weighted_edge("A", "B", 5.0);

    assert_eq!(g.edges().len(), 1);
    assert_eq!(g.edges()[0].weight, 5.0);
}

#[test]
fn star_center_removal_shatters_graph() {
    for k in [2, 3, 6] {
        let g = star(k);
        let report = compute_analysis(&g, &["O"], &CentralityMetric::DEFAULT_SELECTION, &Config::default());

        assert_eq!(report.graph_info.before.component_count, 1);
        assert_eq!(report.graph_info.after.component_count, k);
        assert_eq!(report.diameter.before, 2.0);
        assert_eq!(report.diameter.after, f64::INFINITY);
        assert_eq!(report.graph_info.after.edge_count, 0);
        assert!(report.table.row("O").is_none());
        assert_eq!(report.table.rows.len(), k);
    }
}

#[test]
fn zero_removal_is_idempotent_for_every_metric() {
    let g = make_graph(GraphType::BarabasiAlbert, 40, 5).unwrap();
    let config = Config::default();

    for metric in CentralityMetric::ALL {
        let impact = get_node_removal_impact(&g, NO_REMOVAL, |g| metric.compute(g, &config));
        assert_eq!(impact.new_centrality, metric.compute(&g, &config), "{metric}");
        assert!(impact.delta.iter().all(|(_, d)| *d == 0.0), "{metric}");
    }
}

#[test]
fn overall_delta_sums_metrics() {
    let g = star(4);
    let metrics = [CentralityMetric::Degree, CentralityMetric::UnnormalizedDegree];
    let report = compute_analysis(&g, &["O"], &metrics, &Config::default());

    // Each leaf loses 1/4 normalized degree and 1 raw degree
    for i in 1..=4 {
        let id = format!("L{i}");
        assert_abs_diff_eq!(report.overall_delta[&id], -1.25, epsilon = 1e-12);
        assert_abs_diff_eq!(report.table.cell(&id, "Δ Combined").unwrap(), -1.25, epsilon = 1e-12);
        assert_abs_diff_eq!(report.table.cell(&id, "Combined").unwrap(), 0.0);
    }
    assert!(!report.overall_delta.contains_key("O"));
}

#[test]
fn rows_follow_residual_order() {
    let mut g = Graph::undirected();
    for (s, t) in [("n3", "n1"), ("n1", "n2"), ("n2", "n4")] {
        g.add_weighted_edge(s, t, 1.0);
    }

    let report = compute_analysis(&g, &["n1"], &[CentralityMetric::Closeness], &Config::default());
    let order: Vec<&str> = report.table.rows.iter().map(|r| r.node.as_str()).collect();
    assert_eq!(order, vec!["n3", "n2", "n4"]);
}

#[test]
fn unknown_removed_nodes_are_ignored() {
    let g = triangle();
    let report = compute_analysis(&g, &["Z"], &[CentralityMetric::Degree], &Config::default());

    assert_eq!(report.graph_info.after.node_count, 3);
    for row in &report.table.rows {
        assert_abs_diff_eq!(report.table.cell(&row.node, "Δ Degree").unwrap(), 0.0);
    }
}

#[test]
fn analysis_does_not_mutate_input() {
    let g = make_graph(GraphType::WattsStrogatz, 30, 8).unwrap();
    let before_hash = g.structure_hash();
    let before_nodes = g.number_of_nodes();

    let _ = compute_analysis(&g, &["0", "1", "2"], &CentralityMetric::ALL, &Config::default());

    assert_eq!(g.structure_hash(), before_hash);
    assert_eq!(g.number_of_nodes(), before_nodes);
}

#[test]
fn generators_are_reproducible() {
    for graph_type in GraphType::ALL {
        let a = make_graph(graph_type, 120, 2024).unwrap();
        let b = make_graph(graph_type, 120, 2024).unwrap();

        let edges = |g: &Graph| -> HashSet<(String, String)> {
            g.edges().iter().map(|e| (e.source.clone(), e.target.clone())).collect()
        };
        assert_eq!(a.node_ids(), b.node_ids());
        assert_eq!(edges(&a), edges(&b));
    }
}

#[test]
fn degree_normalization_matches_raw_degree() {
    let g = make_graph(GraphType::ErdosRenyi, 80, 17).unwrap();
    let n = g.number_of_nodes() as f64;
    let norm = degree_centrality(&g);
    let raw = unnormalized_degree_centrality(&g);

    for id in g.node_ids() {
        assert_eq!(raw[id], (norm[id] * (n - 1.0)).round());
    }
}
