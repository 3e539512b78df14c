//! Adjacency-list directed multigraph.

use crate::error::GraphError;

use super::{Arc, LinkId, Vertex, WeightedGraph, check_link, check_vertex};

/// Directed weighted multigraph over vertices `[0, n)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Digraph {
    arcs: Vec<Arc>,
    outgoing: Vec<Vec<LinkId>>,
}

impl Digraph {
    /// Creates a digraph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            arcs: Vec::new(),
            outgoing: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a digraph and inserts every arc from `arcs`.
    ///
    /// # Errors
    /// Fails with the first error [`Digraph::add_arc`] reports.
    pub fn from_arcs(
        vertex_count: usize,
        arcs: impl IntoIterator<Item = Arc>,
    ) -> Result<Self, GraphError> {
        let mut digraph = Self::new(vertex_count);
        for arc in arcs {
            digraph.add_arc(arc)?;
        }
        Ok(digraph)
    }

    /// Appends `arc` and returns its identifier.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when an endpoint is not in the
    /// digraph and [`GraphError::NanWeight`] when the weight is NaN.
    pub fn add_arc(&mut self, arc: Arc) -> Result<LinkId, GraphError> {
        check_link(arc.source(), arc.sink(), arc.weight(), self.vertex_count())?;
        let id = self.arcs.len();
        self.arcs.push(arc);
        self.outgoing[arc.source()].push(id);
        Ok(id)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.outgoing.len() }

    /// Returns the number of arcs.
    #[must_use]
    #[rustfmt::skip]
    pub fn arc_count(&self) -> usize { self.arcs.len() }

    /// Returns all arcs in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn arcs(&self) -> &[Arc] { &self.arcs }

    /// Fails when `vertex` is outside `[0, vertex_count)`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for invalid vertices.
    pub fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        check_vertex(vertex, self.vertex_count())
    }

    /// Returns a lazy, restartable iterator over the arcs leaving `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for invalid vertices.
    pub fn adjacent(
        &self,
        vertex: Vertex,
    ) -> Result<impl Iterator<Item = &Arc> + Clone + '_, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.outgoing[vertex].iter().map(|&id| &self.arcs[id]))
    }

    /// Returns the number of arcs leaving `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for invalid vertices.
    pub fn out_degree(&self, vertex: Vertex) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.outgoing[vertex].len())
    }

    /// Returns the in-degree of every vertex.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertex_count()];
        for arc in &self.arcs {
            degrees[arc.sink()] += 1;
        }
        degrees
    }

    /// Returns the digraph with every arc inverted, preserving arc order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut outgoing = vec![Vec::new(); self.vertex_count()];
        let arcs: Vec<Arc> = self.arcs.iter().map(Arc::reversed).collect();
        for (id, arc) in arcs.iter().enumerate() {
            outgoing[arc.source()].push(id);
        }
        Self { arcs, outgoing }
    }

    /// Builds the dense `n x n` cost matrix of the digraph.
    ///
    /// The diagonal is `0`, pairs without an arc are `+inf`, and parallel arcs
    /// keep the smallest weight. A negative self-loop overrides the diagonal.
    #[must_use]
    pub fn cost_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.vertex_count();
        let mut matrix = vec![vec![f64::INFINITY; n]; n];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        for arc in &self.arcs {
            let cell = &mut matrix[arc.source()][arc.sink()];
            if arc.weight() < *cell {
                *cell = arc.weight();
            }
        }
        matrix
    }
}

impl WeightedGraph for Digraph {
    type Link = Arc;

    fn vertex_count(&self) -> usize {
        Self::vertex_count(self)
    }

    fn links(&self) -> &[Arc] {
        &self.arcs
    }

    fn outgoing(&self, vertex: Vertex) -> Result<&[LinkId], GraphError> {
        self.check_vertex(vertex)?;
        Ok(&self.outgoing[vertex])
    }
}
