//! Result of a rural postman run.

use std::collections::HashSet;

use crate::{
    error::SolutionDefect,
    graph::{Edge, Vertex},
};

/// A closed walk over the input graph covering every required edge.
///
/// Edges use original vertex ids and are oriented head to tail. Edges that
/// were added to restore connectivity or parity appear as extra traversals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RppSolution {
    circuit: Vec<Edge>,
}

impl RppSolution {
    pub(crate) const fn new(circuit: Vec<Edge>) -> Self {
        Self { circuit }
    }

    /// Returns the circuit as an ordered edge sequence.
    #[must_use]
    #[rustfmt::skip]
    pub fn circuit(&self) -> &[Edge] { &self.circuit }

    /// Consumes the solution and returns the circuit.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_circuit(self) -> Vec<Edge> { self.circuit }

    /// Returns `true` when the circuit has no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.circuit.is_empty() }

    /// Returns the sum of the weights of every traversal.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.circuit.iter().map(Edge::weight).sum()
    }

    /// Returns the total cost truncated towards zero, as reported to users.
    #[must_use]
    pub fn truncated_cost(&self) -> i64 {
        self.total_cost().trunc() as i64
    }

    /// Returns the visited vertices from the start of the first edge to the
    /// end of the last one. A closed walk repeats its first vertex at the end.
    #[must_use]
    pub fn vertex_sequence(&self) -> Vec<Vertex> {
        let Some(first) = self.circuit.first() else {
            return Vec::new();
        };
        let mut vertices = Vec::with_capacity(self.circuit.len() + 1);
        vertices.push(first.either());
        vertices.extend(self.circuit.iter().map(|edge| edge.endpoints().1));
        vertices
    }

    /// Checks that the circuit is a closed walk traversing every edge in
    /// `required`, ignoring orientation.
    ///
    /// # Errors
    /// Returns the first [`SolutionDefect`] found.
    ///
    /// # Examples
    /// ```
    /// use postroute_core::{Edge, RuralPostmanBuilder, UndirectedGraph};
    ///
    /// let graph = UndirectedGraph::from_edges(2, [Edge::new(0, 1, 2.0)])?;
    /// let required = [Edge::new(0, 1, 2.0)];
    /// let solution = RuralPostmanBuilder::new().build().solve(&graph, &required)?;
    /// solution.verify(&required)?;
    /// assert_eq!(solution.total_cost(), 4.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn verify(&self, required: &[Edge]) -> Result<(), SolutionDefect> {
        let mut at = self.circuit.first().map(Edge::either);
        for (position, edge) in self.circuit.iter().enumerate() {
            let (tail, head) = edge.endpoints();
            if let Some(expected) = at.filter(|&expected| expected != tail) {
                return Err(SolutionDefect::Broken {
                    position,
                    expected,
                    found: tail,
                });
            }
            at = Some(head);
        }
        if let (Some(first), Some(end)) = (self.circuit.first(), at) {
            if first.either() != end {
                return Err(SolutionDefect::NotClosed {
                    start: first.either(),
                    end,
                });
            }
        }

        let traversed: HashSet<(Vertex, Vertex)> =
            self.circuit.iter().map(Edge::canonical).collect();
        match required
            .iter()
            .find(|edge| !traversed.contains(&edge.canonical()))
        {
            Some(edge) => {
                let (u, v) = edge.endpoints();
                Err(SolutionDefect::MissingRequired { u, v })
            }
            None => Ok(()),
        }
    }
}
