//! Rural postman heuristic.
//!
//! The solver is a fixed pipeline over a working graph G' that holds only the
//! vertices touched so far, renumbered compactly:
//!
//! 1. induce G' from the required edges;
//! 2. if G' is disconnected, join its components along a minimum spanning
//!    tree of the component graph, splicing in shortest paths of the input
//!    graph;
//! 3. if any vertex of G' has odd degree, pair the odd vertices with a
//!    perfect-matching heuristic and splice in the shortest path for each
//!    pair;
//! 4. extract an Eulerian circuit of G' and translate it back to original
//!    vertex ids.
//!
//! Any phase failure aborts the run and the partial working graph is dropped.

mod builder;
mod component_graph;
mod mapping;
mod parity;
mod solution;
mod working;

pub use self::{builder::RuralPostmanBuilder, mapping::VertexMap, solution::RppSolution};

use tracing::{info, instrument};

use crate::{
    connectivity::ConnectedComponents,
    error::RppError,
    euler::EulerianCircuit,
    graph::{Edge, UndirectedGraph, Vertex},
    matching::MatchingStrategy,
    shortest_path::{Dijkstra, DijkstraTrees, Parallelism, ShortestPaths},
};

use self::{
    component_graph::repair_connectivity, parity::repair_parity, working::WorkingGraph,
};

/// Heuristic solver for the undirected rural postman problem.
///
/// Construct with [`RuralPostmanBuilder`]. A solver holds configuration only;
/// every [`RuralPostman::solve`] call owns its working state, so independent
/// runs never share mappings.
///
/// # Examples
/// ```
/// use postroute_core::{Edge, RuralPostmanBuilder, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edges(
///     4,
///     [
///         Edge::new(0, 1, 1.0),
///         Edge::new(1, 2, 1.0),
///         Edge::new(2, 3, 1.0),
///         Edge::new(3, 0, 1.0),
///     ],
/// )?;
/// let required = [Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0)];
/// let solution = RuralPostmanBuilder::new().build().solve(&graph, &required)?;
/// assert_eq!(solution.total_cost(), 4.0);
/// assert!(solution.verify(&required).is_ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct RuralPostman {
    matching: MatchingStrategy,
    seed: Option<u64>,
    parallelism: Parallelism,
}

impl RuralPostman {
    /// Returns the matching heuristic used for parity repair.
    #[must_use]
    #[rustfmt::skip]
    pub const fn matching(&self) -> MatchingStrategy { self.matching }

    /// Returns the vertex-scan seed, if fixed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> Option<u64> { self.seed }

    /// Returns how shortest-path trees are scheduled.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parallelism(&self) -> Parallelism { self.parallelism }

    /// Computes a closed walk over `graph` that traverses every edge in
    /// `required` at least once.
    ///
    /// An empty `required` set yields an empty circuit.
    ///
    /// # Errors
    /// Returns [`RppError::Graph`] when a required edge references a vertex
    /// outside `graph`, [`RppError::Unreachable`] when two parts of the
    /// working graph cannot be joined in `graph`, and the wrapped engine error
    /// when any phase fails.
    #[instrument(
        name = "rpp.solve",
        err,
        skip(self, graph, required),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            required = required.len(),
            strategy = ?self.matching,
        ),
    )]
    pub fn solve(
        &self,
        graph: &UndirectedGraph,
        required: &[Edge],
    ) -> Result<RppSolution, RppError> {
        if required.is_empty() {
            info!("no required edges, returning an empty circuit");
            return Ok(RppSolution::default());
        }

        let working = induce(graph, required)?;
        let mut trees = DijkstraTrees::new();
        let components = ConnectedComponents::new(working.graph());
        let working = if components.is_connected() {
            working
        } else {
            repair_connectivity(graph, working, &components, &mut trees, self.parallelism)?
        };
        let working = repair_parity(graph, working, &mut trees, self)?;
        let solution = extract(&working)?;
        info!(
            traversals = solution.circuit().len(),
            cost = solution.total_cost(),
            working_vertices = working.map().len(),
            "rural postman circuit found"
        );
        Ok(solution)
    }
}

/// Builds G' from the required edges alone.
#[instrument(name = "rpp.induce", err, skip_all, fields(required = required.len()))]
fn induce(graph: &UndirectedGraph, required: &[Edge]) -> Result<WorkingGraph, RppError> {
    for edge in required {
        let (u, v) = edge.endpoints();
        graph.check_vertex(u)?;
        graph.check_vertex(v)?;
    }
    let working = WorkingGraph::new().extend(required)?;
    info!(
        vertices = working.map().len(),
        even = working.graph().is_even(),
        "required subgraph induced"
    );
    Ok(working)
}

/// Extracts the Eulerian circuit of G' in original vertex ids.
#[instrument(name = "rpp.extract", err, skip_all, fields(edges = working.graph().edge_count()))]
fn extract(working: &WorkingGraph) -> Result<RppSolution, RppError> {
    let circuit = EulerianCircuit::new(working.graph())?.into_circuit()?;
    let circuit = circuit
        .iter()
        .map(|edge| working.to_original(edge))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RppSolution::new(circuit))
}

/// Shortest path in `graph` from `from` to `to`, reusing a computed tree
/// when one is rooted at `from`.
fn connecting_path(
    graph: &UndirectedGraph,
    trees: &DijkstraTrees,
    from: Vertex,
    to: Vertex,
) -> Result<Vec<Edge>, RppError> {
    let path = match trees.tree(from) {
        Some(tree) => tree.path_to(to)?,
        None => Dijkstra::new(graph, from)?.path_to(to)?,
    };
    if path.is_empty() && from != to {
        return Err(RppError::Unreachable { from, to });
    }
    Ok(path)
}
