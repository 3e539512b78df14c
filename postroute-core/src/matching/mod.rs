//! Minimum-weight perfect-matching heuristics over complete graphs.
//!
//! Both heuristics require a complete graph with an even number of vertices
//! and return `n / 2` vertex-disjoint edges covering every vertex. Neither is
//! guaranteed optimal; they trade exactness for O(E log E) running time.

mod greedy;
mod vertex_scan;

pub use self::{greedy::greedy_matching, vertex_scan::vertex_scan_matching};

use crate::{
    error::MatchingError,
    graph::{Edge, UndirectedGraph},
};

/// Selects the perfect-matching heuristic used for parity repair.
///
/// # Examples
/// ```
/// use postroute_core::MatchingStrategy;
///
/// assert_eq!(MatchingStrategy::default(), MatchingStrategy::Greedy);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MatchingStrategy {
    /// Accept edges in ascending weight order when both endpoints are free.
    #[default]
    Greedy,
    /// Visit unmatched vertices in random order and pair each with its
    /// nearest free neighbour.
    VertexScan,
}

/// A set of vertex-disjoint edges covering every vertex exactly once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfectMatching {
    edges: Vec<Edge>,
}

impl PerfectMatching {
    /// Returns the matched edges in the order they were committed.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the matching and returns its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<Edge> { self.edges }

    /// Returns the number of matched pairs.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when nothing was matched.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the sum of the matched edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}

/// Fails unless `graph` has an even number of vertices and every pair of
/// distinct vertices is adjacent.
pub(crate) fn validate_complete_even(graph: &UndirectedGraph) -> Result<(), MatchingError> {
    let n = graph.vertex_count();
    if n % 2 == 1 {
        return Err(MatchingError::OddVertexCount { vertex_count: n });
    }
    let mut adjacent = vec![false; n * n];
    for edge in graph.edges() {
        let (u, v) = edge.endpoints();
        adjacent[u * n + v] = true;
        adjacent[v * n + u] = true;
    }
    for vertex in 0..n {
        if let Some(missing) =
            (0..n).find(|&other| other != vertex && !adjacent[vertex * n + other])
        {
            return Err(MatchingError::NotComplete { vertex, missing });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
