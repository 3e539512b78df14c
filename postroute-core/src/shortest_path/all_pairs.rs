//! Batches of independent Dijkstra trees on an undirected graph.

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{Span, field, instrument};

use crate::{
    error::ShortestPathError,
    graph::{Edge, UndirectedGraph, Vertex},
};

use super::{Dijkstra, ShortestPaths};

/// Selects how independent per-source computations are scheduled.
///
/// `Auto` uses the rayon pool when the `parallel` feature is enabled and runs
/// sequentially otherwise, so results are identical across builds.
///
/// # Examples
/// ```
/// use postroute_core::Parallelism;
///
/// assert_eq!(Parallelism::default(), Parallelism::Auto);
/// assert!(!Parallelism::Sequential.is_parallel());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Parallelism {
    /// Use the rayon pool when available.
    #[default]
    Auto,
    /// Always compute on the calling thread.
    Sequential,
}

impl Parallelism {
    /// Returns `true` when work will be distributed across the rayon pool.
    #[must_use]
    pub const fn is_parallel(self) -> bool {
        cfg!(feature = "parallel") && matches!(self, Self::Auto)
    }
}

/// Shortest-path trees of an undirected graph, keyed by source vertex.
///
/// Trees are computed on demand for requested sources and reused afterwards.
/// Each tree reads the graph and writes only its own arrays; a batch is
/// merged only after every tree in it has finished.
#[derive(Clone, Debug, Default)]
pub struct DijkstraTrees {
    trees: HashMap<Vertex, Dijkstra<Edge>>,
}

impl DijkstraTrees {
    /// Creates an empty set of trees.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the trees for every source in `sources` not already present.
    ///
    /// # Errors
    /// Propagates the first [`Dijkstra::new`] failure; no tree from a failed
    /// batch is kept.
    #[instrument(
        name = "shortest_path.all_pairs",
        err,
        skip(self, graph, sources),
        fields(requested = sources.len(), computed = field::Empty),
    )]
    pub fn extend(
        &mut self,
        graph: &UndirectedGraph,
        sources: &[Vertex],
        parallelism: Parallelism,
    ) -> Result<(), ShortestPathError> {
        let mut missing: Vec<Vertex> = sources
            .iter()
            .copied()
            .filter(|source| !self.trees.contains_key(source))
            .collect();
        missing.sort_unstable();
        missing.dedup();

        let batch = if parallelism.is_parallel() {
            compute_parallel(graph, &missing)?
        } else {
            compute_sequential(graph, &missing)?
        };
        Span::current().record("computed", batch.len());
        self.trees.extend(batch);
        Ok(())
    }

    /// Returns the tree rooted at `source`, if computed.
    #[must_use]
    pub fn tree(&self, source: Vertex) -> Option<&Dijkstra<Edge>> {
        self.trees.get(&source)
    }

    /// Returns the number of computed trees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Returns `true` when no tree has been computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Returns the shortest-path cost between two vertices when a tree rooted
    /// at either endpoint has been computed.
    #[must_use]
    pub fn cost(&self, from: Vertex, to: Vertex) -> Option<f64> {
        self.trees
            .get(&from)
            .and_then(|tree| tree.cost_to(to).ok())
            .or_else(|| self.trees.get(&to).and_then(|tree| tree.cost_to(from).ok()))
    }
}

fn compute_sequential(
    graph: &UndirectedGraph,
    sources: &[Vertex],
) -> Result<Vec<(Vertex, Dijkstra<Edge>)>, ShortestPathError> {
    sources
        .iter()
        .map(|&source| Dijkstra::new(graph, source).map(|tree| (source, tree)))
        .collect()
}

#[cfg(feature = "parallel")]
fn compute_parallel(
    graph: &UndirectedGraph,
    sources: &[Vertex],
) -> Result<Vec<(Vertex, Dijkstra<Edge>)>, ShortestPathError> {
    sources
        .par_iter()
        .map(|&source| Dijkstra::new(graph, source).map(|tree| (source, tree)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn compute_parallel(
    graph: &UndirectedGraph,
    sources: &[Vertex],
) -> Result<Vec<(Vertex, Dijkstra<Edge>)>, ShortestPathError> {
    compute_sequential(graph, sources)
}
