//! Edge and arc value types.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use super::{Link, Vertex};

/// An undirected weighted edge.
///
/// The edge remembers the orientation it was created with so traversals have
/// a fixed starting endpoint, but equality, hashing, and ordering ignore that
/// orientation. Edges sort by weight, then by the smaller endpoint, then by
/// the larger endpoint.
///
/// # Examples
/// ```
/// use postroute_core::Edge;
///
/// let edge = Edge::new(3, 1, 2.5);
/// assert_eq!(edge.either(), 3);
/// assert_eq!(edge.other(3), Some(1));
/// assert_eq!(edge, Edge::new(1, 3, 2.5));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    u: Vertex,
    v: Vertex,
    weight: f64,
}

impl Edge {
    /// Creates an edge between `u` and `v`, stored in that orientation.
    #[must_use]
    pub const fn new(u: Vertex, v: Vertex, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Returns the endpoint the edge is stored as starting from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn either(&self) -> Vertex { self.u }

    /// Returns the endpoint opposite to `vertex`, or `None` when `vertex` is
    /// not an endpoint of this edge.
    #[must_use]
    pub const fn other(&self, vertex: Vertex) -> Option<Vertex> {
        if vertex == self.u {
            Some(self.v)
        } else if vertex == self.v {
            Some(self.u)
        } else {
            None
        }
    }

    /// Returns both endpoints in stored orientation.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (Vertex, Vertex) { (self.u, self.v) }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the same edge stored in the opposite orientation.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.v, self.u, self.weight)
    }

    /// Returns `true` when the edge joins `a` and `b` in either orientation.
    #[must_use]
    pub const fn connects(&self, a: Vertex, b: Vertex) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }

    /// Returns `true` when both endpoints coincide.
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.u == self.v
    }

    /// Endpoints ordered `(min, max)`.
    #[must_use]
    pub const fn canonical(&self) -> (Vertex, Vertex) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }

    /// Endpoint opposite to `vertex`, assuming it is one of the endpoints.
    pub(crate) const fn opposite(&self, vertex: Vertex) -> Vertex {
        if vertex == self.u { self.v } else { self.u }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.canonical().cmp(&other.canonical()))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Link for Edge {
    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }

    #[rustfmt::skip]
    fn tail(&self) -> Vertex { self.u }

    #[rustfmt::skip]
    fn head(&self) -> Vertex { self.v }

    fn leaving(&self, from: Vertex) -> Self {
        if from == self.u { *self } else { self.reversed() }
    }
}

/// A directed weighted arc from `source` to `sink`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    source: Vertex,
    sink: Vertex,
    weight: f64,
}

impl Arc {
    /// Creates an arc from `source` to `sink`.
    #[must_use]
    pub const fn new(source: Vertex, sink: Vertex, weight: f64) -> Self {
        Self {
            source,
            sink,
            weight,
        }
    }

    /// Returns the vertex the arc leaves.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> Vertex { self.source }

    /// Returns the vertex the arc enters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sink(&self) -> Vertex { self.sink }

    /// Returns the arc weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the arc pointing the other way with the same weight.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.sink, self.source, self.weight)
    }

    /// Returns the same arc carrying `weight` instead.
    #[must_use]
    pub(crate) const fn with_weight(&self, weight: f64) -> Self {
        Self::new(self.source, self.sink, weight)
    }
}

impl Link for Arc {
    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }

    #[rustfmt::skip]
    fn tail(&self) -> Vertex { self.source }

    #[rustfmt::skip]
    fn head(&self) -> Vertex { self.sink }

    fn leaving(&self, _from: Vertex) -> Self {
        *self
    }
}
