//! Weighted graph model shared by every algorithm in the crate.
//!
//! Vertices are dense identifiers in `[0, n)`. Graphs own their links in
//! insertion order and keep per-vertex incidence lists of link identifiers,
//! so algorithms can address a link by its position (for visited marks and
//! predecessor records) as well as by value.

mod directed;
mod edge;
mod undirected;

pub use self::{
    directed::Digraph,
    edge::{Arc, Edge},
    undirected::UndirectedGraph,
};

use crate::error::GraphError;

/// Dense vertex identifier in `[0, n)`.
pub type Vertex = usize;

/// Position of a link inside its owning graph.
pub type LinkId = usize;

/// A weighted connection that can be traversed from one vertex to another.
///
/// Implemented by [`Edge`] (traversable either way) and [`Arc`] (traversable
/// from source to sink only). Algorithms that work on both kinds of graph are
/// written against this trait.
pub trait Link: Copy + std::fmt::Debug {
    /// Returns the link weight.
    fn weight(&self) -> f64;

    /// Returns the vertex the link starts at in its stored orientation.
    fn tail(&self) -> Vertex;

    /// Returns the vertex the link ends at in its stored orientation.
    fn head(&self) -> Vertex;

    /// Returns the link oriented so that traversal starts at `from`.
    ///
    /// Directed links ignore `from` because they only have one orientation.
    #[must_use]
    fn leaving(&self, from: Vertex) -> Self;
}

/// Read-only view of a graph that algorithms can traverse generically.
pub trait WeightedGraph {
    /// Link type stored by the graph.
    type Link: Link;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns every stored link in insertion order.
    fn links(&self) -> &[Self::Link];

    /// Returns the identifiers of links that can be traversed out of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is not in the
    /// graph.
    fn outgoing(&self, vertex: Vertex) -> Result<&[LinkId], GraphError>;

    /// Fails when `vertex` is outside `[0, vertex_count)`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for invalid vertices.
    fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        check_vertex(vertex, self.vertex_count())
    }
}

pub(crate) fn check_vertex(vertex: Vertex, vertex_count: usize) -> Result<(), GraphError> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}

fn check_link(
    tail: Vertex,
    head: Vertex,
    weight: f64,
    vertex_count: usize,
) -> Result<(), GraphError> {
    check_vertex(tail, vertex_count)?;
    check_vertex(head, vertex_count)?;
    if weight.is_nan() {
        return Err(GraphError::NanWeight {
            source_vertex: tail,
            target: head,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
