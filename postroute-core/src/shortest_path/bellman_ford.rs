//! Bellman-Ford single-source shortest paths with negative-cycle detection.

use std::collections::VecDeque;

use crate::{
    error::ShortestPathError,
    graph::{Arc, Digraph, Link, Vertex},
};

use super::{PathTree, ShortestPaths};

/// Single-source shortest paths on a digraph that may carry negative weights.
///
/// After `n - 1` relaxation rounds a final round marks the source of every
/// arc that can still be relaxed. Everything reachable from such a vertex has
/// no finite shortest-path cost and reports `-inf`. A negative cycle is a
/// derived condition: construction succeeds, [`BellmanFord::has_negative_cycle`]
/// reports it, and only path queries through affected vertices fail.
///
/// # Examples
/// ```
/// use postroute_core::{Arc, BellmanFord, Digraph, ShortestPaths};
///
/// let digraph = Digraph::from_arcs(
///     3,
///     [Arc::new(0, 1, 4.0), Arc::new(0, 2, 1.0), Arc::new(2, 1, -2.0)],
/// )?;
/// let paths = BellmanFord::new(&digraph, 0)?;
/// assert!(!paths.has_negative_cycle());
/// assert_eq!(paths.cost_to(1)?, -1.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BellmanFord {
    tree: PathTree<Arc>,
    unbounded: Vec<bool>,
    cycle: Option<Vec<Arc>>,
}

impl BellmanFord {
    /// Computes shortest paths from `source`.
    ///
    /// # Errors
    /// Returns [`ShortestPathError::Graph`] when `source` is not in the
    /// digraph.
    pub fn new(digraph: &Digraph, source: Vertex) -> Result<Self, ShortestPathError> {
        digraph.check_vertex(source)?;
        let n = digraph.vertex_count();
        let arcs = digraph.arcs();
        let mut tree = PathTree::new(n, source);

        for _ in 1..n {
            let mut changed = false;
            for (id, arc) in arcs.iter().enumerate() {
                changed |= tree.relax(id, *arc);
            }
            if !changed {
                break;
            }
        }

        let mut reducible = Vec::new();
        let mut last_relaxed = None;
        for (id, arc) in arcs.iter().enumerate() {
            if tree.can_relax(arc) {
                tree.relax(id, *arc);
                reducible.push(arc.source());
                last_relaxed = Some(arc.sink());
            }
        }

        let cycle = last_relaxed.and_then(|vertex| {
            walk_back_cycle(&tree, vertex, n).or_else(|| predecessor_cycle(&tree, n))
        });
        let unbounded = propagate_unbounded(digraph, &mut tree, &reducible)?;
        Ok(Self {
            tree,
            unbounded,
            cycle,
        })
    }

    /// Returns `true` when a negative cycle is reachable from the source.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the arcs of one negative cycle, in traversal order, when one
    /// is reachable from the source.
    #[must_use]
    pub fn negative_cycle(&self) -> Option<&[Arc]> {
        self.cycle.as_deref()
    }

    /// Returns the distance array indexed by vertex.
    #[must_use]
    pub fn distances(&self) -> &[f64] {
        self.tree.distances()
    }
}

impl ShortestPaths for BellmanFord {
    type Link = Arc;

    fn source(&self) -> Vertex {
        self.tree.source()
    }

    fn reachable(&self, vertex: Vertex) -> Result<bool, ShortestPathError> {
        self.tree.reachable(vertex)
    }

    fn cost_to(&self, vertex: Vertex) -> Result<f64, ShortestPathError> {
        self.tree.cost_to(vertex)
    }

    /// # Errors
    /// Returns [`ShortestPathError::NegativeCycle`] when `vertex` is reachable
    /// through a negative cycle.
    fn path_to(&self, vertex: Vertex) -> Result<Vec<Arc>, ShortestPathError> {
        self.tree.check(vertex)?;
        if self.unbounded[vertex] {
            return Err(ShortestPathError::NegativeCycle);
        }
        self.tree.path_to(vertex)
    }
}

/// Marks every vertex reachable from a reducible vertex with `-inf`.
fn propagate_unbounded(
    digraph: &Digraph,
    tree: &mut PathTree<Arc>,
    reducible: &[Vertex],
) -> Result<Vec<bool>, ShortestPathError> {
    let mut unbounded = vec![false; digraph.vertex_count()];
    let mut queue = VecDeque::new();
    for &vertex in reducible {
        if !unbounded[vertex] {
            unbounded[vertex] = true;
            queue.push_back(vertex);
        }
    }
    while let Some(vertex) = queue.pop_front() {
        tree.set_distance(vertex, f64::NEG_INFINITY);
        for arc in digraph.adjacent(vertex)? {
            if !unbounded[arc.sink()] {
                unbounded[arc.sink()] = true;
                queue.push_back(arc.sink());
            }
        }
    }
    Ok(unbounded)
}

/// Follows `vertex_count` predecessors from a vertex relaxed in the final
/// round, which always lands on a negative cycle.
fn walk_back_cycle(
    tree: &PathTree<Arc>,
    vertex: Vertex,
    vertex_count: usize,
) -> Option<Vec<Arc>> {
    let mut anchor = vertex;
    for _ in 0..vertex_count {
        anchor = tree.predecessor(anchor)?.link.tail();
    }
    let cycle = collect_cycle(tree, anchor);
    let closed = cycle
        .first()
        .zip(cycle.last())
        .is_some_and(|(first, last)| first.source() == last.sink());
    closed.then_some(cycle)
}

/// Finds a cycle in the predecessor graph. Every such cycle has negative
/// total weight.
fn predecessor_cycle(tree: &PathTree<Arc>, vertex_count: usize) -> Option<Vec<Arc>> {
    const UNSEEN: usize = usize::MAX;
    let mut walk_of = vec![UNSEEN; vertex_count];
    for start in 0..vertex_count {
        if walk_of[start] != UNSEEN {
            continue;
        }
        let mut current = start;
        loop {
            if walk_of[current] == start {
                return Some(collect_cycle(tree, current));
            }
            if walk_of[current] != UNSEEN {
                break;
            }
            walk_of[current] = start;
            match tree.predecessor(current) {
                Some(step) => current = step.link.tail(),
                None => break,
            }
        }
    }
    None
}

fn collect_cycle(tree: &PathTree<Arc>, anchor: Vertex) -> Vec<Arc> {
    let mut cycle = Vec::new();
    let mut current = anchor;
    while let Some(step) = tree.predecessor(current) {
        cycle.push(step.link);
        current = step.link.tail();
        if current == anchor {
            break;
        }
    }
    cycle.reverse();
    cycle
}
