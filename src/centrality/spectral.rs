//! Power-iteration centralities: eigenvector and Katz
//!
//! Both iterate `x <- normalize(A x)` (Katz adds a constant term) and stop once
//! the L1 change of the normalized iterate drops below `n * tol`, or after
//! `max_iter` rounds.

use crate::centrality::{to_map, CentralityMap};
use crate::graph::Graph;

/// Rounds used to estimate the spectral radius
const SPECTRAL_RADIUS_ROUNDS: usize = 250;

/// Rayleigh quotient change below which the spectral radius has converged
const SPECTRAL_RADIUS_TOL: f64 = 1e-9;

/// Katz attenuation as a fraction of `1 / spectral_radius`
const KATZ_ALPHA_FRACTION: f64 = 0.8;

/// Katz attenuation when the spectral radius estimate is zero
const KATZ_FALLBACK_ALPHA: f64 = 0.1;

const KATZ_BETA: f64 = 1.0;

fn l2_norm(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

/// Largest eigenvalue magnitude of the adjacency operator built from
/// out-neighbor lists, by power iteration with a Rayleigh quotient estimate.
///
/// Edge weights are used when `weighted` is set. Returns `0.0` for an empty
/// graph or when an iterate collapses to zero (e.g. no edges).
pub fn estimate_spectral_radius(graph: &Graph, weighted: bool) -> f64 {
    let n = graph.number_of_nodes();
    if n == 0 {
        return 0.0;
    }

    let mut x = vec![1.0 / (n as f64).sqrt(); n];
    let mut last_lambda = 0.0_f64;

    for _ in 0..SPECTRAL_RADIUS_ROUNDS {
        let y: Vec<f64> = (0..n)
            .map(|i| {
                graph
                    .weighted_out_neighbor_indices(i)
                    .map(|(j, w)| {
                        let w = if weighted { w } else { 1.0 };
                        w * x[j]
                    })
                    .sum()
            })
            .collect();

        let norm = l2_norm(&y);
        if norm == 0.0 {
            return 0.0;
        }

        let x_next: Vec<f64> = y.iter().map(|v| v / norm).collect();
        let lambda = x_next
            .iter()
            .zip(&y)
            .map(|(a, b)| a * b)
            .sum::<f64>()
            .abs();

        if (lambda - last_lambda).abs() < SPECTRAL_RADIUS_TOL {
            return lambda;
        }

        x = x_next;
        last_lambda = lambda;
    }

    last_lambda.abs()
}

/// Eigenvector centrality by power iteration.
///
/// Undirected edges contribute in both directions; directed edges push score
/// from source to target. A graph whose iterate collapses to zero (no edges)
/// scores zero everywhere.
pub fn eigenvector_centrality(graph: &Graph, max_iter: usize, tol: f64) -> CentralityMap {
    let n = graph.number_of_nodes();
    if n == 0 {
        return CentralityMap::new();
    }

    let mut x = vec![1.0 / n as f64; n];

    for iteration in 0..max_iter {
        let mut x_new = vec![0.0_f64; n];
        for &(s, t) in graph.edge_endpoints() {
            x_new[t] += x[s];
            if !graph.is_directed() {
                x_new[s] += x[t];
            }
        }

        let norm = l2_norm(&x_new);
        if norm == 0.0 {
            return to_map(graph, vec![0.0; n]);
        }
        for v in &mut x_new {
            *v /= norm;
        }

        let err = l1_distance(&x_new, &x);
        x = x_new;
        if err < n as f64 * tol {
            log::trace!("Eigenvector centrality converged after {} rounds", iteration + 1);
            break;
        }
    }

    to_map(graph, x)
}

/// Katz centrality with `alpha = 0.8 / spectral_radius` (or `0.1` when the
/// radius is zero) and `beta = 1`, summing weighted out-neighbor scores.
pub fn katz_centrality(graph: &Graph, max_iter: usize, tol: f64) -> CentralityMap {
    let n = graph.number_of_nodes();
    if n == 0 {
        return CentralityMap::new();
    }

    let rho = estimate_spectral_radius(graph, true);
    let alpha = if rho > 0.0 {
        KATZ_ALPHA_FRACTION / rho
    } else {
        KATZ_FALLBACK_ALPHA
    };

    let mut x = vec![1.0_f64; n];

    for iteration in 0..max_iter {
        let mut x_new: Vec<f64> = (0..n)
            .map(|v| {
                let total: f64 = graph
                    .weighted_out_neighbor_indices(v)
                    .map(|(u, w)| w * x[u])
                    .sum();
                alpha * total + KATZ_BETA
            })
            .collect();

        let norm = l2_norm(&x_new);
        if norm != 0.0 {
            for v in &mut x_new {
                *v /= norm;
            }
        }

        let err = l1_distance(&x_new, &x);
        x = x_new;
        if err < n as f64 * tol {
            log::trace!("Katz centrality converged after {} rounds", iteration + 1);
            break;
        }
    }

    to_map(graph, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn triangle() -> Graph {
        let mut g = Graph::undirected();
        g.add_weighted_edge("A", "B", 1.0);
        g.add_weighted_edge("B", "C", 1.0);
        g.add_weighted_edge("C", "A", 1.0);
        g
    }

    #[test]
    fn spectral_radius_of_triangle_is_two() {
        assert_abs_diff_eq!(estimate_spectral_radius(&triangle(), true), 2.0, epsilon = 1e-9);
        assert_eq!(estimate_spectral_radius(&Graph::undirected(), true), 0.0);
    }

    #[test]
    fn eigenvector_on_symmetric_graph_is_uniform() {
        let scores = eigenvector_centrality(&triangle(), 5000, 1e-6);
        let expected = 1.0 / 3.0_f64.sqrt();
        for id in ["A", "B", "C"] {
            assert_abs_diff_eq!(scores[id], expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn eigenvector_favours_hub() {
        let mut g = Graph::undirected();
        for leaf in ["x", "y", "z"] {
            g.add_weighted_edge("hub", leaf, 1.0);
        }
        g.add_weighted_edge("x", "y", 1.0);

        let scores = eigenvector_centrality(&g, 5000, 1e-6);
        assert!(scores["hub"] > scores["x"]);
        assert!(scores["x"] > scores["z"]);
    }

    #[test]
    fn edgeless_graph_degenerates_to_zero() {
        let mut g = Graph::undirected();
        g.add_node("a", Default::default());
        g.add_node("b", Default::default());

        let eig = eigenvector_centrality(&g, 100, 1e-6);
        assert_eq!(eig["a"], 0.0);
        assert_eq!(eig["b"], 0.0);

        // beta keeps Katz uniform on an edgeless graph
        let katz = katz_centrality(&g, 100, 1e-6);
        assert_abs_diff_eq!(katz["a"], 1.0 / 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn katz_scores_are_normalized() {
        let mut g = Graph::undirected();
        g.add_weighted_edge("a", "b", 1.0);
        g.add_weighted_edge("b", "c", 1.0);
        g.add_weighted_edge("c", "d", 1.0);

        let scores = katz_centrality(&g, 1000, 1e-6);
        let norm: f64 = scores.values().map(|v| v * v).sum::<f64>().sqrt();
        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-9);
        assert!(scores["b"] > scores["a"]);
    }

    #[test]
    fn empty_graph_gives_empty_maps() {
        let g = Graph::directed();
        assert!(eigenvector_centrality(&g, 10, 1e-6).is_empty());
        assert!(katz_centrality(&g, 10, 1e-6).is_empty());
    }
}
