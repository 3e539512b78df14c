//! Eulerian circuit extraction for undirected multigraphs.
//!
//! The traversal keeps its frontier on an explicit stack of
//! `(vertex, edge used to get there)` frames, so memory stays bounded by the
//! edge count regardless of how long the circuit is.

use crate::{
    error::EulerError,
    graph::{Edge, Link, LinkId, UndirectedGraph, Vertex},
};

/// Eulerian circuit of a connected undirected graph, if one exists.
///
/// Construction fails only when the graph is disconnected. Whether a circuit
/// exists is decided by degree parity, and [`EulerianCircuit::circuit`] fails
/// when it does not.
///
/// # Examples
/// ```
/// use postroute_core::{Edge, EulerianCircuit, UndirectedGraph};
///
/// let triangle = UndirectedGraph::from_edges(
///     3,
///     [Edge::new(0, 1, 1.0), Edge::new(2, 1, 1.0), Edge::new(2, 0, 1.0)],
/// )?;
/// let euler = EulerianCircuit::new(&triangle)?;
/// let walk: Vec<_> = euler.circuit()?.iter().map(Edge::endpoints).collect();
/// assert_eq!(walk, vec![(0, 1), (1, 2), (2, 0)]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EulerianCircuit {
    outcome: Result<Vec<Edge>, EulerError>,
}

impl EulerianCircuit {
    /// Checks connectivity and parity, then extracts the circuit starting and
    /// ending at vertex `0`.
    ///
    /// # Errors
    /// Returns [`EulerError::Disconnected`] when some vertex cannot be reached
    /// from vertex `0`.
    pub fn new(graph: &UndirectedGraph) -> Result<Self, EulerError> {
        if let Some(unreachable) = first_unreachable(graph) {
            return Err(EulerError::Disconnected { unreachable });
        }
        let outcome = match first_odd_vertex(graph) {
            Some((vertex, degree)) => Err(EulerError::NoCircuit { vertex, degree }),
            None => Ok(hierholzer(graph, 0)),
        };
        Ok(Self { outcome })
    }

    /// Returns `true` when every vertex has even degree.
    #[must_use]
    pub fn has_circuit(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Returns the circuit as edges oriented head to tail, using every edge of
    /// the graph exactly once.
    ///
    /// # Errors
    /// Returns [`EulerError::NoCircuit`] when some vertex has odd degree.
    pub fn circuit(&self) -> Result<&[Edge], EulerError> {
        self.outcome.as_deref().map_err(Clone::clone)
    }

    /// Consumes the extractor and returns the circuit.
    ///
    /// # Errors
    /// Same as [`EulerianCircuit::circuit`].
    pub fn into_circuit(self) -> Result<Vec<Edge>, EulerError> {
        self.outcome
    }
}

fn first_unreachable(graph: &UndirectedGraph) -> Option<Vertex> {
    let n = graph.vertex_count();
    if n == 0 {
        return None;
    }
    let mut seen = vec![false; n];
    let mut stack = vec![0];
    seen[0] = true;
    while let Some(vertex) = stack.pop() {
        for edge in graph.adjacent(vertex).into_iter().flatten() {
            let next = edge.opposite(vertex);
            if !seen[next] {
                seen[next] = true;
                stack.push(next);
            }
        }
    }
    seen.iter().position(|&reached| !reached)
}

fn first_odd_vertex(graph: &UndirectedGraph) -> Option<(Vertex, usize)> {
    (0..graph.vertex_count())
        .filter_map(|vertex| graph.degree(vertex).ok().map(|degree| (vertex, degree)))
        .find(|(_, degree)| degree % 2 == 1)
}

/// Iterative Hierholzer. Edges are collected as their frames are popped,
/// which yields the circuit backwards; it is then reversed and re-oriented so
/// each edge starts where the previous one ended.
fn hierholzer(graph: &UndirectedGraph, start: Vertex) -> Vec<Edge> {
    let n = graph.vertex_count();
    if n == 0 || graph.edge_count() == 0 {
        return Vec::new();
    }
    let mut used = vec![false; graph.edge_count()];
    let mut cursor = vec![0_usize; n];
    let mut stack: Vec<(Vertex, Option<LinkId>)> = vec![(start, None)];
    let mut closed: Vec<LinkId> = Vec::with_capacity(graph.edge_count());

    while let Some(&(vertex, via)) = stack.last() {
        let incident = graph.incident_ids(vertex).unwrap_or_default();
        while cursor[vertex] < incident.len() && used[incident[cursor[vertex]]] {
            cursor[vertex] += 1;
        }
        if let Some(&id) = incident.get(cursor[vertex]) {
            used[id] = true;
            cursor[vertex] += 1;
            let next = graph.edges()[id].opposite(vertex);
            stack.push((next, Some(id)));
        } else {
            stack.pop();
            if let Some(id) = via {
                closed.push(id);
            }
        }
    }
    closed.reverse();

    let mut at = start;
    closed
        .into_iter()
        .map(|id| {
            let edge = graph.edges()[id].leaving(at);
            at = edge.head();
            edge
        })
        .collect()
}
