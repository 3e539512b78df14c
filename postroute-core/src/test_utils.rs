//! Shared test utilities for `postroute-core`.

use postroute_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{Edge, UndirectedGraph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `POSTROUTE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds an undirected graph from `(u, v, weight)` triples.
///
/// # Panics
/// Panics when an endpoint is out of range; fixtures are expected to be
/// well-formed.
#[must_use]
pub(crate) fn graph_from(vertex_count: usize, edges: &[(usize, usize, f64)]) -> UndirectedGraph {
    UndirectedGraph::from_edges(
        vertex_count,
        edges.iter().map(|&(u, v, w)| Edge::new(u, v, w)),
    )
    .expect("fixture edges must be in range")
}

/// Builds the complete graph on `vertex_count` vertices with weights from
/// `weight(u, v)`.
#[must_use]
pub(crate) fn complete_graph(
    vertex_count: usize,
    weight: impl Fn(usize, usize) -> f64,
) -> UndirectedGraph {
    let edges: Vec<_> = (0..vertex_count)
        .flat_map(|u| ((u + 1)..vertex_count).map(move |v| (u, v)))
        .map(|(u, v)| (u, v, weight(u, v)))
        .collect();
    graph_from(vertex_count, &edges)
}
