//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` instead of `.expect()`.

use postroute_core::{GraphError, MatchingError, RppError, ShortestPathError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A generated edge was rejected by the graph model.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A shortest-path computation failed.
    #[error("shortest-path computation failed: {0}")]
    ShortestPath(#[from] ShortestPathError),
    /// A matching heuristic failed.
    #[error("matching failed: {0}")]
    Matching(#[from] MatchingError),
    /// The solver failed on a generated instance.
    #[error("rural postman solve failed: {0}")]
    Rpp(#[from] RppError),
    /// A generator parameter is outside its valid range.
    #[error("invalid synthetic parameter `{parameter}`")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}
