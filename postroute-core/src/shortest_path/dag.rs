//! Single-source shortest paths on directed acyclic graphs.

use crate::{
    error::ShortestPathError,
    graph::{Arc, Digraph, Vertex, WeightedGraph},
    topological::TopologicalOrder,
};

use super::{PathTree, ShortestPaths};

/// Shortest paths on a DAG by relaxing arcs in topological order.
///
/// Negative weights are allowed; one linear pass suffices because every
/// vertex is final before its outgoing arcs are relaxed.
#[derive(Clone, Debug, PartialEq)]
pub struct DagShortestPaths {
    tree: PathTree<Arc>,
}

impl DagShortestPaths {
    /// Computes shortest paths from `source`.
    ///
    /// # Errors
    /// Returns [`ShortestPathError::Graph`] when `source` is not in the
    /// digraph and [`ShortestPathError::Topological`] when it has a cycle.
    pub fn new(digraph: &Digraph, source: Vertex) -> Result<Self, ShortestPathError> {
        digraph.check_vertex(source)?;
        let order = TopologicalOrder::new(digraph)?;
        let mut tree = PathTree::new(digraph.vertex_count(), source);
        let arcs = digraph.arcs();
        for &vertex in order.order() {
            if tree.distance(vertex) == f64::INFINITY {
                continue;
            }
            for &id in digraph.outgoing(vertex)? {
                tree.relax(id, arcs[id]);
            }
        }
        Ok(Self { tree })
    }

    /// Returns the distance array indexed by vertex.
    #[must_use]
    pub fn distances(&self) -> &[f64] {
        self.tree.distances()
    }
}

impl ShortestPaths for DagShortestPaths {
    type Link = Arc;

    fn source(&self) -> Vertex {
        self.tree.source()
    }

    fn reachable(&self, vertex: Vertex) -> Result<bool, ShortestPathError> {
        self.tree.reachable(vertex)
    }

    fn cost_to(&self, vertex: Vertex) -> Result<f64, ShortestPathError> {
        self.tree.cost_to(vertex)
    }

    fn path_to(&self, vertex: Vertex) -> Result<Vec<Arc>, ShortestPathError> {
        self.tree.path_to(vertex)
    }
}
