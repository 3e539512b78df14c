//! Minimum spanning tree construction (Prim's algorithm).
//!
//! Used by the rural postman solver on the auxiliary component graph, whose
//! vertices are connected components and whose edge weights are the cheapest
//! shortest-path costs between them. Disconnected inputs yield a minimum
//! spanning forest together with its component count.

use crate::{
    error::MstError,
    graph::{Edge, UndirectedGraph},
    heap::IndexedMinHeap,
};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the forest edges, each oriented from the vertex already in the
    /// tree towards the vertex it attached.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count <= 1
    }

    /// Returns the sum of the forest edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}

/// Computes a minimum spanning forest with eager Prim.
///
/// Each tree is grown from its lowest-numbered vertex. Self-loops never enter
/// the forest and parallel edges are handled naturally.
///
/// # Errors
/// Returns [`MstError::NonFiniteWeight`] when an edge weight is infinite.
///
/// # Examples
/// ```
/// use postroute_core::{Edge, UndirectedGraph, prim};
///
/// let graph = UndirectedGraph::from_edges(
///     3,
///     [Edge::new(0, 1, 4.0), Edge::new(1, 2, 1.0), Edge::new(0, 2, 2.0)],
/// )?;
/// let forest = prim(&graph)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn prim(graph: &UndirectedGraph) -> Result<MinimumSpanningForest, MstError> {
    if let Some(edge) = graph.edges().iter().find(|edge| !edge.weight().is_finite()) {
        let (left, right) = edge.endpoints();
        return Err(MstError::NonFiniteWeight { left, right });
    }

    let n = graph.vertex_count();
    let mut in_tree = vec![false; n];
    let mut best = vec![f64::INFINITY; n];
    let mut attach: Vec<Option<usize>> = vec![None; n];
    let mut queue = IndexedMinHeap::with_capacity(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut component_count = 0;

    for root in 0..n {
        if in_tree[root] {
            continue;
        }
        component_count += 1;
        best[root] = 0.0;
        queue.insert(root, 0.0)?;
        while !queue.is_empty() {
            let (vertex, _) = queue.extract_min()?;
            in_tree[vertex] = true;
            if let Some(edge) = attach[vertex].and_then(|id| graph.edge(id)) {
                edges.push(if edge.either() == vertex { edge.reversed() } else { *edge });
            }
            for &id in graph.incident_ids(vertex).into_iter().flatten() {
                let Some(edge) = graph.edge(id) else { continue };
                let next = edge.opposite(vertex);
                if in_tree[next] || edge.weight() >= best[next] {
                    continue;
                }
                best[next] = edge.weight();
                attach[next] = Some(id);
                queue.push_or_decrease(next, edge.weight())?;
            }
        }
    }
    Ok(MinimumSpanningForest {
        edges,
        component_count,
    })
}
