//! Connected-component labelling for undirected graphs.

use crate::{
    error::ConnectivityError,
    graph::{UndirectedGraph, Vertex},
};

/// Component labelling of an undirected graph.
///
/// Labels are assigned by an explicit-stack traversal in ascending order of
/// the lowest vertex of each component, so component `0` always contains
/// vertex `0`. All queries are O(1) apart from [`ConnectedComponents::members`].
///
/// # Examples
/// ```
/// use postroute_core::{ConnectedComponents, Edge, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edges(4, [Edge::new(0, 2, 1.0)])?;
/// let components = ConnectedComponents::new(&graph);
/// assert_eq!(components.component_count(), 3);
/// assert!(components.same_component(0, 2)?);
/// assert_eq!(components.component_size(components.component_of(3)?)?, 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectedComponents {
    label: Vec<usize>,
    sizes: Vec<usize>,
}

impl ConnectedComponents {
    /// Labels every vertex of `graph`.
    #[must_use]
    pub fn new(graph: &UndirectedGraph) -> Self {
        const UNLABELLED: usize = usize::MAX;
        let n = graph.vertex_count();
        let mut label = vec![UNLABELLED; n];
        let mut sizes = Vec::new();
        let mut stack = Vec::new();
        for root in 0..n {
            if label[root] != UNLABELLED {
                continue;
            }
            let id = sizes.len();
            let mut size = 0;
            label[root] = id;
            stack.push(root);
            while let Some(vertex) = stack.pop() {
                size += 1;
                for edge in graph.adjacent(vertex).into_iter().flatten() {
                    let next = edge.opposite(vertex);
                    if label[next] == UNLABELLED {
                        label[next] = id;
                        stack.push(next);
                    }
                }
            }
            sizes.push(size);
        }
        Self { label, sizes }
    }

    /// Returns the number of components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.sizes.len() }

    /// Returns `true` when the graph has at most one component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.sizes.len() <= 1
    }

    /// Returns the component containing `vertex`.
    ///
    /// # Errors
    /// Fails when `vertex` is not in the graph.
    pub fn component_of(&self, vertex: Vertex) -> Result<usize, ConnectivityError> {
        crate::graph::check_vertex(vertex, self.label.len())?;
        Ok(self.label[vertex])
    }

    /// Returns `true` when `u` and `v` lie in the same component.
    ///
    /// # Errors
    /// Fails when either vertex is not in the graph.
    pub fn same_component(&self, u: Vertex, v: Vertex) -> Result<bool, ConnectivityError> {
        Ok(self.component_of(u)? == self.component_of(v)?)
    }

    /// Returns the number of vertices in component `id`.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::ComponentOutOfRange`] for unknown ids.
    pub fn component_size(&self, id: usize) -> Result<usize, ConnectivityError> {
        self.sizes
            .get(id)
            .copied()
            .ok_or(ConnectivityError::ComponentOutOfRange {
                component: id,
                component_count: self.sizes.len(),
            })
    }

    /// Returns the vertices of component `id` in ascending order.
    ///
    /// # Errors
    /// Returns [`ConnectivityError::ComponentOutOfRange`] for unknown ids.
    pub fn members(&self, id: usize) -> Result<Vec<Vertex>, ConnectivityError> {
        let size = self.component_size(id)?;
        let mut members = Vec::with_capacity(size);
        members.extend(
            self.label
                .iter()
                .enumerate()
                .filter(|&(_, &label)| label == id)
                .map(|(vertex, _)| vertex),
        );
        Ok(members)
    }

    /// Returns the component label of every vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn labels(&self) -> &[usize] { &self.label }
}
