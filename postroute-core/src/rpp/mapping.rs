//! Bidirectional vertex renumbering between the input graph and the working
//! graph.

use std::collections::HashMap;

use crate::graph::Vertex;

/// Grow-only mapping between original vertex ids and compact working ids.
///
/// Compact ids are handed out densely in first-seen order, so
/// `compact(original(i)) == Some(i)` for every assigned `i` and
/// `original(compact(v)) == Some(v)` for every mapped `v`.
///
/// # Examples
/// ```
/// use postroute_core::VertexMap;
///
/// let mut map = VertexMap::new();
/// assert_eq!(map.insert(42), 0);
/// assert_eq!(map.insert(7), 1);
/// assert_eq!(map.insert(42), 0);
/// assert_eq!(map.original(1), Some(7));
/// assert_eq!(map.compact(42), Some(0));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VertexMap {
    forward: HashMap<Vertex, Vertex>,
    inverse: Vec<Vertex>,
}

impl VertexMap {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compact id of `original`, assigning the next free one if
    /// it has not been seen.
    pub fn insert(&mut self, original: Vertex) -> Vertex {
        let next = self.inverse.len();
        let compact = *self.forward.entry(original).or_insert(next);
        if compact == next {
            self.inverse.push(original);
        }
        compact
    }

    /// Returns the compact id of `original`, if mapped.
    #[must_use]
    pub fn compact(&self, original: Vertex) -> Option<Vertex> {
        self.forward.get(&original).copied()
    }

    /// Returns the original id behind `compact`, if assigned.
    #[must_use]
    pub fn original(&self, compact: Vertex) -> Option<Vertex> {
        self.inverse.get(compact).copied()
    }

    /// Returns the original ids indexed by compact id.
    #[must_use]
    #[rustfmt::skip]
    pub fn originals(&self) -> &[Vertex] { &self.inverse }

    /// Returns the number of mapped vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.inverse.len() }

    /// Returns `true` when nothing has been mapped.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.inverse.is_empty() }

    /// Returns `true` when both directions agree for every mapped vertex.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.forward.len() == self.inverse.len()
            && self
                .inverse
                .iter()
                .enumerate()
                .all(|(compact, original)| self.forward.get(original) == Some(&compact))
    }
}
