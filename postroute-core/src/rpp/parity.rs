//! Parity repair through a perfect matching over odd-degree vertices.

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, instrument};

use crate::{
    error::RppError,
    graph::{Edge, UndirectedGraph, Vertex},
    matching::{MatchingStrategy, greedy_matching, vertex_scan_matching},
    shortest_path::DijkstraTrees,
};

use super::{RuralPostman, connecting_path, working::WorkingGraph};

/// Pairs the odd-degree vertices of G' and splices in a shortest path for
/// every pair, leaving every vertex with even degree.
#[instrument(
    name = "rpp.repair_parity",
    err,
    skip_all,
    fields(strategy = ?solver.matching(), odd = field::Empty, spliced = field::Empty),
)]
pub(super) fn repair_parity(
    graph: &UndirectedGraph,
    working: WorkingGraph,
    trees: &mut DijkstraTrees,
    solver: &RuralPostman,
) -> Result<WorkingGraph, RppError> {
    let odd: Vec<Vertex> = working
        .graph()
        .odd_vertices()
        .into_iter()
        .filter_map(|compact| working.map().original(compact))
        .collect();
    Span::current().record("odd", odd.len());
    if odd.is_empty() {
        return Ok(working);
    }

    trees.extend(graph, &odd, solver.parallelism())?;
    let mut complete = UndirectedGraph::new(odd.len());
    for (i, &from) in odd.iter().enumerate() {
        for (j, &to) in odd.iter().enumerate().skip(i + 1) {
            let cost = trees.cost(from, to).unwrap_or(f64::INFINITY);
            if !cost.is_finite() {
                return Err(RppError::Unreachable { from, to });
            }
            complete.add_edge(Edge::new(i, j, cost))?;
        }
    }

    let matching = match solver.matching() {
        MatchingStrategy::Greedy => greedy_matching(&complete)?,
        MatchingStrategy::VertexScan => {
            let mut rng = match solver.seed() {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };
            vertex_scan_matching(&complete, &mut rng)?
        }
    };

    let mut spliced = Vec::new();
    for pair in matching.edges() {
        let (i, j) = pair.endpoints();
        spliced.extend(connecting_path(graph, trees, odd[i], odd[j])?);
    }
    Span::current().record("spliced", spliced.len());
    debug!(
        pairs = matching.len(),
        matching_weight = matching.total_weight(),
        "odd vertices paired"
    );
    Ok(working.extend(&spliced)?)
}
