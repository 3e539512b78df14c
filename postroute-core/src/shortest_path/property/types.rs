//! Fixture types for shortest-path property tests.

use test_strategy::Arbitrary;

use crate::graph::Arc;

/// Shape of a generated digraph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Random arcs with non-negative weights.
    NonNegative,
    /// Arcs only from lower to higher vertex ids, weights may be negative.
    Acyclic,
    /// Symmetric arc pairs with non-negative weights, mirroring an
    /// undirected graph.
    Symmetric,
}

/// A generated digraph with the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct PathFixture {
    pub vertex_count: usize,
    pub arcs: Vec<Arc>,
    pub source: usize,
    pub shape: GraphShape,
}
