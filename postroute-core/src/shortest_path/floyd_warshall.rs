//! Floyd-Warshall all-pairs shortest paths over a dense cost matrix.

use crate::{
    error::ShortestPathError,
    graph::{self, Arc, Digraph, Vertex},
};

/// All-pairs shortest paths on a dense `n x n` cost matrix.
///
/// The matrix uses `+inf` for missing arcs and `0` on the diagonal. Results
/// are undefined when a negative cycle exists; [`FloydWarshall::has_negative_cycle`]
/// reports whether one was observed on the diagonal.
///
/// # Examples
/// ```
/// use postroute_core::FloydWarshall;
///
/// let inf = f64::INFINITY;
/// let paths = FloydWarshall::new(vec![
///     vec![0.0, 3.0, inf],
///     vec![inf, 0.0, 1.0],
///     vec![1.0, inf, 0.0],
/// ])?;
/// assert_eq!(paths.cost(0, 2)?, 4.0);
/// assert_eq!(paths.cost(2, 1)?, 4.0);
/// # Ok::<(), postroute_core::ShortestPathError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FloydWarshall {
    costs: Vec<Vec<f64>>,
    dist: Vec<Vec<f64>>,
    pred: Vec<Vec<Option<Vertex>>>,
}

impl FloydWarshall {
    /// Computes all-pairs shortest paths from a cost matrix.
    ///
    /// # Errors
    /// Returns [`ShortestPathError::NotSquare`] when some row length differs
    /// from the number of rows.
    pub fn new(costs: Vec<Vec<f64>>) -> Result<Self, ShortestPathError> {
        let n = costs.len();
        if let Some((row, actual)) = costs
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != n)
        {
            return Err(ShortestPathError::NotSquare {
                row,
                expected: n,
                actual,
            });
        }
        Ok(Self::solve(costs))
    }

    /// Computes all-pairs shortest paths over the cost matrix of `digraph`.
    #[must_use]
    pub fn from_digraph(digraph: &Digraph) -> Self {
        Self::solve(digraph.cost_matrix())
    }

    fn solve(costs: Vec<Vec<f64>>) -> Self {
        let n = costs.len();
        let mut dist = costs.clone();
        let mut pred: Vec<Vec<Option<Vertex>>> = costs
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, cost)| (i != j && *cost < f64::INFINITY).then_some(i))
                    .collect()
            })
            .collect();

        for k in 0..n {
            for i in 0..n {
                let through = dist[i][k];
                if through == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let candidate = through + dist[k][j];
                    if candidate < dist[i][j] {
                        dist[i][j] = candidate;
                        pred[i][j] = pred[k][j];
                    }
                }
            }
        }
        Self { costs, dist, pred }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.dist.len() }

    /// Returns the full distance matrix.
    #[must_use]
    #[rustfmt::skip]
    pub fn distance_matrix(&self) -> &[Vec<f64>] { &self.dist }

    /// Returns the predecessor matrix: entry `[i][j]` is the vertex preceding
    /// `j` on a shortest path from `i`.
    #[must_use]
    #[rustfmt::skip]
    pub fn predecessor_matrix(&self) -> &[Vec<Option<Vertex>>] { &self.pred }

    /// Returns `true` when some vertex lies on a negative cycle.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        self.dist.iter().enumerate().any(|(i, row)| row[i] < 0.0)
    }

    /// Returns `true` when `to` is reachable from `from`.
    ///
    /// # Errors
    /// Fails when either vertex is out of range.
    pub fn reachable(&self, from: Vertex, to: Vertex) -> Result<bool, ShortestPathError> {
        Ok(self.cost(from, to)? < f64::INFINITY)
    }

    /// Returns the shortest-path cost from `from` to `to`.
    ///
    /// # Errors
    /// Fails when either vertex is out of range.
    pub fn cost(&self, from: Vertex, to: Vertex) -> Result<f64, ShortestPathError> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.dist[from][to])
    }

    /// Returns the arcs of a shortest path from `from` to `to`, carrying the
    /// input matrix weights. Empty when `from == to` or `to` is unreachable.
    ///
    /// # Errors
    /// Fails when either vertex is out of range, or with
    /// [`ShortestPathError::NegativeCycle`] when the predecessors loop.
    pub fn path(&self, from: Vertex, to: Vertex) -> Result<Vec<Arc>, ShortestPathError> {
        self.check(from)?;
        self.check(to)?;
        let mut arcs = Vec::new();
        if from == to {
            return Ok(arcs);
        }
        let mut current = to;
        while current != from {
            let Some(previous) = self.pred[from][current] else {
                return Ok(Vec::new());
            };
            if arcs.len() >= self.vertex_count() {
                return Err(ShortestPathError::NegativeCycle);
            }
            arcs.push(Arc::new(previous, current, self.costs[previous][current]));
            current = previous;
        }
        arcs.reverse();
        Ok(arcs)
    }

    fn check(&self, vertex: Vertex) -> Result<(), ShortestPathError> {
        Ok(graph::check_vertex(vertex, self.vertex_count())?)
    }
}
