//! The working graph G' and its renumbering map.

use crate::{
    error::{GraphError, RppError},
    graph::{Edge, UndirectedGraph},
};

use super::VertexMap;

/// Induced working graph over compact ids, rebuilt whenever it grows.
#[derive(Clone, Debug)]
pub(super) struct WorkingGraph {
    map: VertexMap,
    edges: Vec<Edge>,
    graph: UndirectedGraph,
}

impl WorkingGraph {
    pub(super) fn new() -> Self {
        Self {
            map: VertexMap::new(),
            edges: Vec::new(),
            graph: UndirectedGraph::new(0),
        }
    }

    #[rustfmt::skip]
    pub(super) const fn map(&self) -> &VertexMap { &self.map }

    #[rustfmt::skip]
    pub(super) const fn graph(&self) -> &UndirectedGraph { &self.graph }

    /// Appends edges given in original ids, mapping new vertices as they are
    /// met, then rebuilds the graph so its vertex count matches the map.
    pub(super) fn extend<'a>(
        mut self,
        edges: impl IntoIterator<Item = &'a Edge>,
    ) -> Result<Self, GraphError> {
        for edge in edges {
            let (u, v) = edge.endpoints();
            let cu = self.map.insert(u);
            let cv = self.map.insert(v);
            self.edges.push(Edge::new(cu, cv, edge.weight()));
        }
        debug_assert!(self.map.is_consistent(), "vertex map lost its inverse");
        self.graph = UndirectedGraph::from_edges(self.map.len(), self.edges.iter().copied())?;
        Ok(self)
    }

    /// Translates an edge over compact ids back to original ids.
    pub(super) fn to_original(&self, edge: &Edge) -> Result<Edge, RppError> {
        let (u, v) = edge.endpoints();
        let lookup = |compact| {
            self.map.original(compact).ok_or(GraphError::VertexOutOfRange {
                vertex: compact,
                vertex_count: self.map.len(),
            })
        };
        Ok(Edge::new(lookup(u)?, lookup(v)?, edge.weight()))
    }
}
