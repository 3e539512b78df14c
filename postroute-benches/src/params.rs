//! Benchmark parameter types.

use std::fmt;

/// Parameters for a benchmark over a synthetic instance.
#[derive(Clone, Debug)]
pub struct InstanceBenchParams {
    /// Number of vertices in the street grid.
    pub vertex_count: usize,
    /// Percentage of edges that are required.
    pub required_percent: u8,
}

impl fmt::Display for InstanceBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},req={}%", self.vertex_count, self.required_percent)
    }
}

/// Parameters for a matching benchmark over a complete graph.
#[derive(Clone, Debug)]
pub struct MatchingBenchParams {
    /// Number of vertices in the complete graph.
    pub vertex_count: usize,
}

impl fmt::Display for MatchingBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}
