//! Adjacency-list undirected multigraph.

use crate::error::GraphError;

use super::{Edge, LinkId, Vertex, WeightedGraph, check_link, check_vertex};

/// Undirected weighted multigraph over vertices `[0, n)`.
///
/// Each edge is stored once and referenced from the incidence lists of both
/// endpoints. A self-loop is referenced twice from its vertex, so it
/// contributes two to that vertex's degree. Parallel edges are allowed.
///
/// # Examples
/// ```
/// use postroute_core::{Edge, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::new(3);
/// graph.add_edge(Edge::new(0, 1, 1.0))?;
/// graph.add_edge(Edge::new(1, 2, 4.0))?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.degree(1)?, 2);
/// assert_eq!(graph.odd_vertices(), vec![0, 2]);
/// # Ok::<(), postroute_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UndirectedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<LinkId>>,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph and inserts every edge from `edges`.
    ///
    /// # Errors
    /// Fails with the first error [`UndirectedGraph::add_edge`] reports.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Appends `edge` and returns its identifier.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when an endpoint is not in the
    /// graph and [`GraphError::NanWeight`] when the weight is NaN.
    pub fn add_edge(&mut self, edge: Edge) -> Result<LinkId, GraphError> {
        let (u, v) = edge.endpoints();
        check_link(u, v, edge.weight(), self.vertex_count())?;
        let id = self.edges.len();
        self.edges.push(edge);
        self.incidence[u].push(id);
        self.incidence[v].push(id);
        Ok(id)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.incidence.len() }

    /// Returns the number of distinct edges (not incidences).
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns all edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the edge stored under `id`, if any.
    #[must_use]
    pub fn edge(&self, id: LinkId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Fails when `vertex` is outside `[0, vertex_count)`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for invalid vertices.
    pub fn check_vertex(&self, vertex: Vertex) -> Result<(), GraphError> {
        check_vertex(vertex, self.vertex_count())
    }

    /// Returns a lazy, restartable iterator over the edges incident to
    /// `vertex`, in stored orientation.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for invalid vertices.
    pub fn adjacent(
        &self,
        vertex: Vertex,
    ) -> Result<impl Iterator<Item = &Edge> + Clone + '_, GraphError> {
        let ids = self.incident_ids(vertex)?;
        Ok(ids.iter().map(|&id| &self.edges[id]))
    }

    /// Returns the number of edge endpoints at `vertex`; self-loops count
    /// twice.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for invalid vertices.
    pub fn degree(&self, vertex: Vertex) -> Result<usize, GraphError> {
        Ok(self.incident_ids(vertex)?.len())
    }

    /// Returns `true` when every vertex has even degree.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.incidence.iter().all(|ids| ids.len() % 2 == 0)
    }

    /// Returns the vertices of odd degree in ascending order.
    #[must_use]
    pub fn odd_vertices(&self) -> Vec<Vertex> {
        self.incidence
            .iter()
            .enumerate()
            .filter(|(_, ids)| ids.len() % 2 == 1)
            .map(|(vertex, _)| vertex)
            .collect()
    }

    pub(crate) fn incident_ids(&self, vertex: Vertex) -> Result<&[LinkId], GraphError> {
        self.check_vertex(vertex)?;
        Ok(&self.incidence[vertex])
    }
}

impl WeightedGraph for UndirectedGraph {
    type Link = Edge;

    fn vertex_count(&self) -> usize {
        Self::vertex_count(self)
    }

    fn links(&self) -> &[Edge] {
        &self.edges
    }

    fn outgoing(&self, vertex: Vertex) -> Result<&[LinkId], GraphError> {
        self.incident_ids(vertex)
    }
}
