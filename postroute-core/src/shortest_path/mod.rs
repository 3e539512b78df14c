//! Shortest-path engines.
//!
//! Every engine computes its full result eagerly in its constructor and is
//! read-only afterwards. Single-source engines share the [`ShortestPaths`]
//! query surface; the all-pairs engines ([`FloydWarshall`], [`Johnson`]) take
//! a `(from, to)` pair instead.

mod all_pairs;
mod bellman_ford;
mod dag;
mod dijkstra;
mod floyd_warshall;
mod johnson;

pub use self::{
    all_pairs::{DijkstraTrees, Parallelism},
    bellman_ford::BellmanFord,
    dag::DagShortestPaths,
    dijkstra::Dijkstra,
    floyd_warshall::FloydWarshall,
    johnson::Johnson,
};

use crate::{
    error::ShortestPathError,
    graph::{self, Link, LinkId, Vertex},
};

/// Query surface shared by single-source shortest-path engines.
pub trait ShortestPaths {
    /// Link type returned by [`ShortestPaths::path_to`].
    type Link: Link;

    /// Returns the source vertex the engine was built from.
    fn source(&self) -> Vertex;

    /// Returns `true` when `vertex` is reachable from the source.
    ///
    /// # Errors
    /// Fails when `vertex` is not in the graph.
    fn reachable(&self, vertex: Vertex) -> Result<bool, ShortestPathError>;

    /// Returns the shortest-path cost to `vertex`; `+inf` when unreachable.
    ///
    /// # Errors
    /// Fails when `vertex` is not in the graph.
    fn cost_to(&self, vertex: Vertex) -> Result<f64, ShortestPathError>;

    /// Returns the links of a shortest path from the source to `vertex`, each
    /// oriented along the path. The path is empty when `vertex` is the source
    /// or is unreachable.
    ///
    /// # Errors
    /// Fails when `vertex` is not in the graph, or when the engine cannot
    /// produce a well-defined path.
    fn path_to(&self, vertex: Vertex) -> Result<Vec<Self::Link>, ShortestPathError>;
}

/// Predecessor record: the link used to reach a vertex, oriented so that its
/// head is that vertex, together with its identifier in the source graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Step<L> {
    pub(crate) id: LinkId,
    pub(crate) link: L,
}

/// Distance and predecessor arrays owned by a single-source engine.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PathTree<L> {
    source: Vertex,
    dist: Vec<f64>,
    pred: Vec<Option<Step<L>>>,
}

impl<L: Link> PathTree<L> {
    pub(crate) fn new(vertex_count: usize, source: Vertex) -> Self {
        let mut dist = vec![f64::INFINITY; vertex_count];
        if let Some(slot) = dist.get_mut(source) {
            *slot = 0.0;
        }
        Self {
            source,
            dist,
            pred: vec![None; vertex_count],
        }
    }

    #[rustfmt::skip]
    pub(crate) fn source(&self) -> Vertex { self.source }

    #[rustfmt::skip]
    pub(crate) fn distances(&self) -> &[f64] { &self.dist }

    pub(crate) fn distance(&self, vertex: Vertex) -> f64 {
        self.dist[vertex]
    }

    pub(crate) fn set_distance(&mut self, vertex: Vertex, distance: f64) {
        self.dist[vertex] = distance;
    }

    pub(crate) fn predecessor(&self, vertex: Vertex) -> Option<Step<L>> {
        self.pred[vertex]
    }

    /// Relaxes `link` (already oriented tail to head). Returns `true` when the
    /// head's distance improved.
    pub(crate) fn relax(&mut self, id: LinkId, link: L) -> bool {
        let candidate = self.dist[link.tail()] + link.weight();
        if candidate < self.dist[link.head()] {
            self.dist[link.head()] = candidate;
            self.pred[link.head()] = Some(Step { id, link });
            true
        } else {
            false
        }
    }

    /// Returns `true` when `link` could still lower its head's distance.
    pub(crate) fn can_relax(&self, link: &L) -> bool {
        self.dist[link.tail()] + link.weight() < self.dist[link.head()]
    }

    pub(crate) fn check(&self, vertex: Vertex) -> Result<(), ShortestPathError> {
        Ok(graph::check_vertex(vertex, self.dist.len())?)
    }

    pub(crate) fn reachable(&self, vertex: Vertex) -> Result<bool, ShortestPathError> {
        self.check(vertex)?;
        Ok(self.dist[vertex] < f64::INFINITY)
    }

    pub(crate) fn cost_to(&self, vertex: Vertex) -> Result<f64, ShortestPathError> {
        self.check(vertex)?;
        Ok(self.dist[vertex])
    }

    /// Walks predecessors back from `vertex` and returns the steps in path
    /// order. A walk longer than the vertex count means the predecessors form
    /// a cycle, which only a negative cycle can cause.
    pub(crate) fn steps_to(&self, vertex: Vertex) -> Result<Vec<Step<L>>, ShortestPathError> {
        self.check(vertex)?;
        let mut steps = Vec::new();
        let mut current = vertex;
        while let Some(step) = self.pred[current] {
            if steps.len() >= self.dist.len() {
                return Err(ShortestPathError::NegativeCycle);
            }
            steps.push(step);
            current = step.link.tail();
        }
        steps.reverse();
        Ok(steps)
    }

    pub(crate) fn path_to(&self, vertex: Vertex) -> Result<Vec<L>, ShortestPathError> {
        Ok(self
            .steps_to(vertex)?
            .into_iter()
            .map(|step| step.link)
            .collect())
    }
}


#[cfg(test)]
mod property;
