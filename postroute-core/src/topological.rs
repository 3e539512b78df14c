//! Topological ordering of digraphs (Kahn's algorithm).

use std::collections::VecDeque;

use crate::{
    error::TopologicalError,
    graph::{Digraph, Vertex},
};

/// A topological order of an acyclic digraph.
///
/// Sources are released in ascending vertex order so the result is
/// deterministic.
///
/// # Examples
/// ```
/// use postroute_core::{Arc, Digraph, TopologicalOrder};
///
/// let digraph = Digraph::from_arcs(3, [Arc::new(2, 0, 1.0), Arc::new(0, 1, 1.0)])?;
/// let order = TopologicalOrder::new(&digraph)?;
/// assert_eq!(order.order(), &[2, 0, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TopologicalOrder {
    order: Vec<Vertex>,
    rank: Vec<usize>,
}

impl TopologicalOrder {
    /// Orders the vertices of `digraph`.
    ///
    /// # Errors
    /// Returns [`TopologicalError::Cyclic`] when the digraph has a directed
    /// cycle.
    pub fn new(digraph: &Digraph) -> Result<Self, TopologicalError> {
        let n = digraph.vertex_count();
        let mut in_degree = digraph.in_degrees();
        let mut ready: VecDeque<Vertex> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, degree)| **degree == 0)
            .map(|(vertex, _)| vertex)
            .collect();
        let mut order = Vec::with_capacity(n);
        while let Some(vertex) = ready.pop_front() {
            order.push(vertex);
            for arc in digraph.adjacent(vertex).into_iter().flatten() {
                let degree = &mut in_degree[arc.sink()];
                *degree -= 1;
                if *degree == 0 {
                    ready.push_back(arc.sink());
                }
            }
        }
        if order.len() < n {
            return Err(TopologicalError::Cyclic {
                remaining: n - order.len(),
            });
        }
        let mut rank = vec![0; n];
        for (position, &vertex) in order.iter().enumerate() {
            rank[vertex] = position;
        }
        Ok(Self { order, rank })
    }

    /// Returns the vertices in topological order.
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> &[Vertex] { &self.order }

    /// Returns the position of `vertex` in the order, if it exists.
    #[must_use]
    pub fn rank(&self, vertex: Vertex) -> Option<usize> {
        self.rank.get(vertex).copied()
    }
}
