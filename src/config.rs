//! Configuration management for the graph impact analyzer

/// Tunables for preprocessing and the iterative centralities
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Drop isolated nodes before analysis
    pub remove_zero_degree: bool,

    /// Restrict the graph to its largest weak component before analysis
    pub use_largest_component: bool,

    /// Power-iteration cap for eigenvector centrality
    pub eigenvector_max_iter: usize,

    /// Per-node convergence tolerance for eigenvector centrality
    pub eigenvector_tol: f64,

    /// Power-iteration cap for Katz centrality
    pub katz_max_iter: usize,

    /// Per-node convergence tolerance for Katz centrality
    pub katz_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remove_zero_degree: false,
            use_largest_component: false,
            eigenvector_max_iter: 5000,
            eigenvector_tol: 1e-6,
            katz_max_iter: 1000,
            katz_tol: 1e-6,
        }
    }
}

impl Config {
    /// Create a configuration with custom preprocessing flags and default
    /// iteration settings
    pub fn new(remove_zero_degree: bool, use_largest_component: bool) -> Self {
        Self {
            remove_zero_degree,
            use_largest_component,
            ..Self::default()
        }
    }
}
