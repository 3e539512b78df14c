//! Randomised vertex-scan matching.

use rand::Rng;

use crate::{
    error::MatchingError,
    graph::{Edge, UndirectedGraph, Vertex},
};

use super::{PerfectMatching, validate_complete_even};

/// Matches `graph` by repeatedly drawing a free vertex at random and pairing
/// it with its cheapest free neighbour.
///
/// Each vertex's neighbours are sorted once up front; a per-vertex cursor
/// skips neighbours that have since been matched, so the scan is linear in
/// the number of edges after sorting. Pass a seeded generator for
/// reproducible output.
///
/// # Errors
/// Returns [`MatchingError::OddVertexCount`] or
/// [`MatchingError::NotComplete`] when the graph does not qualify.
pub fn vertex_scan_matching<R: Rng + ?Sized>(
    graph: &UndirectedGraph,
    rng: &mut R,
) -> Result<PerfectMatching, MatchingError> {
    validate_complete_even(graph)?;
    let n = graph.vertex_count();
    let neighbours = sorted_neighbours(graph);
    let mut cursor = vec![0_usize; n];
    let mut free = FreeSet::new(n);
    let mut chosen = Vec::with_capacity(n / 2);

    while let Some(vertex) = free.draw(rng) {
        let candidates = &neighbours[vertex];
        while cursor[vertex] < candidates.len() && !free.contains(candidates[cursor[vertex]].1) {
            cursor[vertex] += 1;
        }
        let Some(&(weight, mate)) = candidates.get(cursor[vertex]) else {
            // Only reachable if the completeness check was bypassed.
            let missing = free.any().unwrap_or(vertex);
            return Err(MatchingError::NotComplete { vertex, missing });
        };
        free.remove(mate);
        chosen.push(Edge::new(vertex, mate, weight));
    }
    Ok(PerfectMatching { edges: chosen })
}

/// Neighbours of every vertex as `(weight, vertex)`, cheapest first; ties go
/// to the lower vertex id.
fn sorted_neighbours(graph: &UndirectedGraph) -> Vec<Vec<(f64, Vertex)>> {
    let mut neighbours = vec![Vec::new(); graph.vertex_count()];
    for edge in graph.edges().iter().filter(|edge| !edge.is_loop()) {
        let (u, v) = edge.endpoints();
        neighbours[u].push((edge.weight(), v));
        neighbours[v].push((edge.weight(), u));
    }
    for list in &mut neighbours {
        list.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    }
    neighbours
}

/// Unmatched vertices with O(1) membership, removal, and random draw.
struct FreeSet {
    vertices: Vec<Vertex>,
    slot: Vec<Option<usize>>,
}

impl FreeSet {
    fn new(n: usize) -> Self {
        Self {
            vertices: (0..n).collect(),
            slot: (0..n).map(Some).collect(),
        }
    }

    fn contains(&self, vertex: Vertex) -> bool {
        self.slot[vertex].is_some()
    }

    fn any(&self) -> Option<Vertex> {
        self.vertices.first().copied()
    }

    /// Removes and returns a uniformly chosen free vertex.
    fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Vertex> {
        if self.vertices.is_empty() {
            return None;
        }
        let vertex = self.vertices[rng.gen_range(0..self.vertices.len())];
        self.remove(vertex);
        Some(vertex)
    }

    fn remove(&mut self, vertex: Vertex) {
        let Some(index) = self.slot[vertex].take() else {
            return;
        };
        self.vertices.swap_remove(index);
        if let Some(&moved) = self.vertices.get(index) {
            self.slot[moved] = Some(index);
        }
    }
}
