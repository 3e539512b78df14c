//! Johnson's all-pairs shortest paths via potential reweighting.

use crate::{
    error::ShortestPathError,
    graph::{self, Arc, Digraph, Vertex},
};

use super::{BellmanFord, Dijkstra};

/// All-pairs shortest paths on a sparse digraph with possibly negative arcs.
///
/// A synthetic vertex with zero-weight arcs to every vertex seeds a
/// Bellman-Ford run whose distances become the potential `h`. Arcs are
/// reweighted to `w + h(u) - h(v) >= 0` and Dijkstra runs from every vertex.
/// When a negative cycle exists every query fails with
/// [`ShortestPathError::NegativeCycle`].
///
/// # Examples
/// ```
/// use postroute_core::{Arc, Digraph, Johnson};
///
/// let digraph = Digraph::from_arcs(
///     3,
///     [Arc::new(0, 1, 2.0), Arc::new(1, 2, -1.0), Arc::new(0, 2, 4.0)],
/// )?;
/// let paths = Johnson::new(&digraph)?;
/// assert_eq!(paths.cost(0, 2)?, 1.0);
/// assert_eq!(paths.path(0, 2)?, vec![Arc::new(0, 1, 2.0), Arc::new(1, 2, -1.0)]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Johnson {
    arcs: Vec<Arc>,
    dist: Vec<Vec<f64>>,
    trees: Vec<Dijkstra<Arc>>,
    cycle: Option<Vec<Arc>>,
}

impl Johnson {
    /// Computes all-pairs shortest paths for `digraph`.
    ///
    /// # Errors
    /// Propagates engine failures. A negative cycle is not an error here.
    pub fn new(digraph: &Digraph) -> Result<Self, ShortestPathError> {
        let n = digraph.vertex_count();
        let mut augmented = Digraph::from_arcs(n + 1, digraph.arcs().iter().copied())?;
        for vertex in 0..n {
            augmented.add_arc(Arc::new(n, vertex, 0.0))?;
        }
        let potential_paths = BellmanFord::new(&augmented, n)?;
        if let Some(cycle) = potential_paths.negative_cycle() {
            return Ok(Self {
                arcs: digraph.arcs().to_vec(),
                dist: Vec::new(),
                trees: Vec::new(),
                cycle: Some(cycle.to_vec()),
            });
        }

        let potential = &potential_paths.distances()[..n];
        let reweighted = Digraph::from_arcs(
            n,
            digraph.arcs().iter().map(|arc| {
                let adjusted =
                    arc.weight() + potential[arc.source()] - potential[arc.sink()];
                arc.with_weight(adjusted.max(0.0))
            }),
        )?;
        let trees = (0..n)
            .map(|source| Dijkstra::new(&reweighted, source))
            .collect::<Result<Vec<_>, _>>()?;
        let dist = trees
            .iter()
            .enumerate()
            .map(|(u, tree)| {
                tree.distances()
                    .iter()
                    .enumerate()
                    .map(|(v, &d)| {
                        if d < f64::INFINITY {
                            d + potential[v] - potential[u]
                        } else {
                            f64::INFINITY
                        }
                    })
                    .collect()
            })
            .collect();
        Ok(Self {
            arcs: digraph.arcs().to_vec(),
            dist,
            trees,
            cycle: None,
        })
    }

    /// Returns `true` when the digraph contains a negative cycle.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the arcs of one negative cycle when the digraph has one.
    #[must_use]
    pub fn negative_cycle(&self) -> Option<&[Arc]> {
        self.cycle.as_deref()
    }

    /// Returns the full distance matrix.
    ///
    /// # Errors
    /// Returns [`ShortestPathError::NegativeCycle`] when one was detected.
    pub fn distance_matrix(&self) -> Result<&[Vec<f64>], ShortestPathError> {
        self.ensure_acyclic_costs()?;
        Ok(&self.dist)
    }

    /// Returns the shortest-path cost from `from` to `to`.
    ///
    /// # Errors
    /// Returns [`ShortestPathError::NegativeCycle`] when one was detected and
    /// [`ShortestPathError::Graph`] for out-of-range vertices.
    pub fn cost(&self, from: Vertex, to: Vertex) -> Result<f64, ShortestPathError> {
        self.check_pair(from, to)?;
        Ok(self.dist[from][to])
    }

    /// Returns `true` when `to` is reachable from `from`.
    ///
    /// # Errors
    /// Same as [`Johnson::cost`].
    pub fn reachable(&self, from: Vertex, to: Vertex) -> Result<bool, ShortestPathError> {
        Ok(self.cost(from, to)? < f64::INFINITY)
    }

    /// Returns a shortest path from `from` to `to` as arcs of the input
    /// digraph, with their original weights.
    ///
    /// # Errors
    /// Same as [`Johnson::cost`].
    pub fn path(&self, from: Vertex, to: Vertex) -> Result<Vec<Arc>, ShortestPathError> {
        self.check_pair(from, to)?;
        let ids = self.trees[from].path_ids(to)?;
        Ok(ids.into_iter().map(|id| self.arcs[id]).collect())
    }

    fn ensure_acyclic_costs(&self) -> Result<(), ShortestPathError> {
        if self.has_negative_cycle() {
            Err(ShortestPathError::NegativeCycle)
        } else {
            Ok(())
        }
    }

    fn check_pair(&self, from: Vertex, to: Vertex) -> Result<(), ShortestPathError> {
        self.ensure_acyclic_costs()?;
        graph::check_vertex(from, self.trees.len())?;
        graph::check_vertex(to, self.trees.len())?;
        Ok(())
    }
}
