//! Greedy matching by ascending edge weight.

use crate::{
    error::MatchingError,
    graph::{Edge, UndirectedGraph},
};

use super::{PerfectMatching, validate_complete_even};

/// Matches `graph` by scanning its edges in ascending order and accepting an
/// edge whenever both endpoints are still free.
///
/// Ties are broken by the endpoint identifiers, so the result is fully
/// deterministic.
///
/// # Errors
/// Returns [`MatchingError::OddVertexCount`] or
/// [`MatchingError::NotComplete`] when the graph does not qualify.
///
/// # Examples
/// ```
/// use postroute_core::{Edge, UndirectedGraph, greedy_matching};
///
/// let graph = UndirectedGraph::from_edges(
///     4,
///     [
///         Edge::new(0, 1, 1.0),
///         Edge::new(0, 2, 5.0),
///         Edge::new(0, 3, 5.0),
///         Edge::new(1, 2, 5.0),
///         Edge::new(1, 3, 5.0),
///         Edge::new(2, 3, 2.0),
///     ],
/// )?;
/// let matching = greedy_matching(&graph)?;
/// assert_eq!(matching.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn greedy_matching(graph: &UndirectedGraph) -> Result<PerfectMatching, MatchingError> {
    validate_complete_even(graph)?;
    let n = graph.vertex_count();
    let mut edges: Vec<Edge> = graph
        .edges()
        .iter()
        .filter(|edge| !edge.is_loop())
        .copied()
        .collect();
    edges.sort_unstable();

    let mut matched = vec![false; n];
    let mut chosen = Vec::with_capacity(n / 2);
    for edge in edges {
        if chosen.len() == n / 2 {
            break;
        }
        let (u, v) = edge.endpoints();
        if !matched[u] && !matched[v] {
            matched[u] = true;
            matched[v] = true;
            chosen.push(edge);
        }
    }
    Ok(PerfectMatching { edges: chosen })
}
