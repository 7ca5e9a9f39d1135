//! Error types for graph construction, generation and report export

use thiserror::Error;

/// Errors raised by the library.
///
/// Numeric degeneracies (empty graphs, zero-norm iterates) and disconnection are not
/// errors: they resolve to zero scores, empty maps or an infinite diameter.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A caller-supplied parameter is out of range or unrecognised
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A centrality metric name that is not one of the supported keys
    #[error("unknown centrality metric: {0}")]
    UnknownMetric(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
