//! Dijkstra's algorithm over graphs with non-negative weights.

use crate::{
    error::ShortestPathError,
    graph::{Edge, Link, LinkId, Vertex, WeightedGraph},
    heap::IndexedMinHeap,
};

use super::{PathTree, ShortestPaths};

/// Single-source shortest paths for non-negative weights.
///
/// Works on both [`UndirectedGraph`](crate::UndirectedGraph) (yielding
/// [`Edge`]s oriented along each path) and [`Digraph`](crate::Digraph)
/// (yielding [`Arc`](crate::Arc)s).
///
/// # Examples
/// ```
/// use postroute_core::{Dijkstra, Edge, ShortestPaths, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edges(
///     3,
///     [Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0), Edge::new(0, 2, 5.0)],
/// )?;
/// let paths = Dijkstra::new(&graph, 0)?;
/// assert_eq!(paths.cost_to(2)?, 2.0);
/// let hops: Vec<_> = paths.path_to(2)?.iter().map(Edge::endpoints).collect();
/// assert_eq!(hops, vec![(0, 1), (1, 2)]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Dijkstra<L = Edge> {
    tree: PathTree<L>,
}

impl<L: Link> Dijkstra<L> {
    /// Computes shortest paths from `source`.
    ///
    /// # Errors
    /// Returns [`ShortestPathError::NegativeWeight`] when any link has a
    /// negative weight, and [`ShortestPathError::Graph`] when `source` is not
    /// in the graph.
    pub fn new<G>(graph: &G, source: Vertex) -> Result<Self, ShortestPathError>
    where
        G: WeightedGraph<Link = L>,
    {
        graph.check_vertex(source)?;
        if let Some(link) = graph.links().iter().find(|link| link.weight() < 0.0) {
            return Err(ShortestPathError::NegativeWeight {
                source_vertex: link.tail(),
                target: link.head(),
                weight: link.weight(),
            });
        }

        let links = graph.links();
        let mut tree = PathTree::new(graph.vertex_count(), source);
        let mut queue = IndexedMinHeap::with_capacity(graph.vertex_count());
        queue.insert(source, 0.0)?;
        while !queue.is_empty() {
            let (vertex, _) = queue.extract_min()?;
            for &id in graph.outgoing(vertex)? {
                let link = links[id].leaving(vertex);
                if tree.relax(id, link) {
                    queue.push_or_decrease(link.head(), tree.distance(link.head()))?;
                }
            }
        }
        Ok(Self { tree })
    }

    /// Returns the distance array indexed by vertex.
    #[must_use]
    pub fn distances(&self) -> &[f64] {
        self.tree.distances()
    }

    /// Returns the identifiers (in the input graph) of the links on the path
    /// to `vertex`, in path order.
    pub(crate) fn path_ids(&self, vertex: Vertex) -> Result<Vec<LinkId>, ShortestPathError> {
        Ok(self
            .tree
            .steps_to(vertex)?
            .into_iter()
            .map(|step| step.id)
            .collect())
    }
}

impl<L: Link> ShortestPaths for Dijkstra<L> {
    type Link = L;

    fn source(&self) -> Vertex {
        self.tree.source()
    }

    fn reachable(&self, vertex: Vertex) -> Result<bool, ShortestPathError> {
        self.tree.reachable(vertex)
    }

    fn cost_to(&self, vertex: Vertex) -> Result<f64, ShortestPathError> {
        self.tree.cost_to(vertex)
    }

    fn path_to(&self, vertex: Vertex) -> Result<Vec<L>, ShortestPathError> {
        self.tree.path_to(vertex)
    }
}
