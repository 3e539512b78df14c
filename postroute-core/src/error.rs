//! Error types for the postroute core library.
//!
//! Every component exposes one error enum together with a companion code enum
//! whose string form is stable for logging and exit-status reporting.
//! Precondition violations surface immediately; derived infeasibility such as
//! a negative cycle is recorded by the engine and only reported here when a
//! dependent query is invoked.

use std::fmt;

use thiserror::Error;

use crate::graph::Vertex;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised by the graph model.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A vertex identifier fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex identifier.
        vertex: Vertex,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge or arc was given a NaN weight.
    #[error("link ({source_vertex}, {target}) has a NaN weight")]
    NanWeight {
        /// First endpoint (or source) of the rejected link.
        source_vertex: Vertex,
        /// Second endpoint (or sink) of the rejected link.
        target: Vertex,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex identifier fell outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge or arc was given a NaN weight.
        NanWeight => NanWeight { .. } => "GRAPH_NAN_WEIGHT",
    }
}

/// Contract violations reported by the indexed priority queue.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HeapError {
    /// `extract_min` was called on an empty queue.
    #[error("priority queue underflow")]
    Underflow,
    /// The item identifier exceeds the queue's capacity.
    #[error("item {item} is out of range for a queue of capacity {capacity}")]
    ItemOutOfRange {
        /// The offending item identifier.
        item: usize,
        /// Number of item slots in the queue.
        capacity: usize,
    },
    /// The item is already stored in the queue.
    #[error("item {item} is already present in the priority queue")]
    DuplicateItem {
        /// Identifier of the duplicated item.
        item: usize,
    },
    /// The item is not (or no longer) stored in the queue.
    #[error("item {item} is not present in the priority queue")]
    MissingItem {
        /// Identifier of the missing item.
        item: usize,
    },
    /// `decrease_key` was asked to raise a key.
    #[error("new key {requested} for item {item} is larger than the current key {current}")]
    KeyIncrease {
        /// Identifier of the item.
        item: usize,
        /// Key currently stored for the item.
        current: f64,
        /// Rejected replacement key.
        requested: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// `extract_min` was called on an empty queue.
        Underflow => Underflow => "HEAP_UNDERFLOW",
        /// The item identifier exceeds the queue's capacity.
        ItemOutOfRange => ItemOutOfRange { .. } => "HEAP_ITEM_OUT_OF_RANGE",
        /// The item is already stored in the queue.
        DuplicateItem => DuplicateItem { .. } => "HEAP_DUPLICATE_ITEM",
        /// The item is not stored in the queue.
        MissingItem => MissingItem { .. } => "HEAP_MISSING_ITEM",
        /// `decrease_key` was asked to raise a key.
        KeyIncrease => KeyIncrease { .. } => "HEAP_KEY_INCREASE",
    }
}

/// Errors raised while ordering a digraph topologically.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TopologicalError {
    /// The digraph contains at least one directed cycle.
    #[error("digraph is not acyclic: {remaining} vertices lie on or behind a cycle")]
    Cyclic {
        /// Number of vertices that could not be ordered.
        remaining: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`TopologicalError`] variants.
    enum TopologicalErrorCode for TopologicalError {
        /// The digraph contains a directed cycle.
        Cyclic => Cyclic { .. } => "TOPOLOGICAL_CYCLIC",
    }
}

/// Errors raised by the shortest-path engines.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ShortestPathError {
    /// A vertex query or source was invalid.
    #[error(transparent)]
    Graph {
        /// Underlying graph error.
        #[from]
        source: GraphError,
    },
    /// The priority queue contract was violated.
    #[error(transparent)]
    Heap {
        /// Underlying heap error.
        #[from]
        source: HeapError,
    },
    /// The DAG engine was given a digraph with a cycle.
    #[error(transparent)]
    Topological {
        /// Underlying ordering error.
        #[from]
        source: TopologicalError,
    },
    /// Dijkstra was given a link with a negative weight.
    #[error("link ({source_vertex}, {target}) has negative weight {weight}")]
    NegativeWeight {
        /// First endpoint (or source) of the offending link.
        source_vertex: Vertex,
        /// Second endpoint (or sink) of the offending link.
        target: Vertex,
        /// The negative weight.
        weight: f64,
    },
    /// A cost matrix row did not match the number of rows.
    #[error("cost matrix is not square: row {row} has {actual} columns, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of rows (and therefore expected columns).
        expected: usize,
        /// Actual number of columns in the row.
        actual: usize,
    },
    /// A negative cycle makes the requested answer undefined.
    #[error("a negative-cost cycle makes the query undefined")]
    NegativeCycle,
}

define_error_codes! {
    /// Stable codes describing [`ShortestPathError`] variants.
    enum ShortestPathErrorCode for ShortestPathError {
        /// A vertex query or source was invalid.
        Graph => Graph { .. } => "SHORTEST_PATH_GRAPH",
        /// The priority queue contract was violated.
        Heap => Heap { .. } => "SHORTEST_PATH_HEAP",
        /// The DAG engine was given a cyclic digraph.
        NotAcyclic => Topological { .. } => "SHORTEST_PATH_NOT_ACYCLIC",
        /// Dijkstra was given a negative weight.
        NegativeWeight => NegativeWeight { .. } => "SHORTEST_PATH_NEGATIVE_WEIGHT",
        /// A cost matrix was not square.
        NotSquare => NotSquare { .. } => "SHORTEST_PATH_NOT_SQUARE",
        /// A negative cycle makes the query undefined.
        NegativeCycle => NegativeCycle => "SHORTEST_PATH_NEGATIVE_CYCLE",
    }
}

/// Errors raised by component labelling queries.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConnectivityError {
    /// A vertex query was out of range.
    #[error(transparent)]
    Graph {
        /// Underlying graph error.
        #[from]
        source: GraphError,
    },
    /// A component identifier was out of range.
    #[error("component {component} does not exist ({component_count} components)")]
    ComponentOutOfRange {
        /// The offending component identifier.
        component: usize,
        /// Number of components found.
        component_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConnectivityError`] variants.
    enum ConnectivityErrorCode for ConnectivityError {
        /// A vertex query was out of range.
        Graph => Graph { .. } => "CONNECTIVITY_GRAPH",
        /// A component identifier was out of range.
        ComponentOutOfRange => ComponentOutOfRange { .. } => "CONNECTIVITY_COMPONENT_OUT_OF_RANGE",
    }
}

/// Errors raised by the perfect-matching heuristics.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MatchingError {
    /// A perfect matching needs an even number of vertices.
    #[error("graph has an odd number of vertices ({vertex_count})")]
    OddVertexCount {
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The graph is missing at least one edge of the complete graph.
    #[error("graph is not complete: vertex {vertex} is not adjacent to vertex {missing}")]
    NotComplete {
        /// Vertex whose neighbourhood is incomplete.
        vertex: Vertex,
        /// A vertex it is not adjacent to.
        missing: Vertex,
    },
}

define_error_codes! {
    /// Stable codes describing [`MatchingError`] variants.
    enum MatchingErrorCode for MatchingError {
        /// The vertex count is odd.
        OddVertexCount => OddVertexCount { .. } => "MATCHING_ODD_VERTEX_COUNT",
        /// The graph is not complete.
        NotComplete => NotComplete { .. } => "MATCHING_NOT_COMPLETE",
    }
}

/// Errors returned while computing a minimum spanning tree/forest.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// An edge contained a non-finite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// One endpoint of the edge.
        left: Vertex,
        /// The other endpoint of the edge.
        right: Vertex,
    },
    /// The priority queue contract was violated.
    #[error(transparent)]
    Heap {
        /// Underlying heap error.
        #[from]
        source: HeapError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An edge contained a non-finite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "MST_NON_FINITE_WEIGHT",
        /// The priority queue contract was violated.
        Heap => Heap { .. } => "MST_HEAP",
    }
}

/// Errors raised by the Eulerian circuit extractor.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EulerError {
    /// Some vertex is unreachable from vertex `0`.
    #[error("graph is not connected: vertex {unreachable} is unreachable from vertex 0")]
    Disconnected {
        /// First vertex found unreachable.
        unreachable: Vertex,
    },
    /// Some vertex has odd degree, so no closed walk uses every edge once.
    #[error("graph has no Eulerian circuit: vertex {vertex} has odd degree {degree}")]
    NoCircuit {
        /// First vertex found with odd degree.
        vertex: Vertex,
        /// Its degree.
        degree: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`EulerError`] variants.
    enum EulerErrorCode for EulerError {
        /// The graph is not connected.
        Disconnected => Disconnected { .. } => "EULER_DISCONNECTED",
        /// The graph has an odd-degree vertex.
        NoCircuit => NoCircuit { .. } => "EULER_NO_CIRCUIT",
    }
}

/// Error type produced when running the rural postman heuristic.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RppError {
    /// A required edge referenced a vertex outside the input graph.
    #[error("invalid input graph: {source}")]
    Graph {
        /// Underlying graph error.
        #[from]
        source: GraphError,
    },
    /// A shortest-path engine failed.
    #[error("shortest-path stage failed: {source}")]
    ShortestPath {
        /// Underlying engine error.
        #[from]
        source: ShortestPathError,
    },
    /// Component labelling failed.
    #[error("connectivity stage failed: {source}")]
    Connectivity {
        /// Underlying connectivity error.
        #[from]
        source: ConnectivityError,
    },
    /// The matching heuristic failed.
    #[error("matching stage failed: {source}")]
    Matching {
        /// Underlying matching error.
        #[from]
        source: MatchingError,
    },
    /// The component spanning tree failed.
    #[error("spanning tree stage failed: {source}")]
    Mst {
        /// Underlying MST error.
        #[from]
        source: MstError,
    },
    /// Circuit extraction failed.
    #[error("circuit extraction failed: {source}")]
    Euler {
        /// Underlying Eulerian circuit error.
        #[from]
        source: EulerError,
    },
    /// Two vertices that must be joined have no path between them.
    #[error("vertex {to} is unreachable from vertex {from} in the input graph")]
    Unreachable {
        /// Original-graph vertex the path starts at.
        from: Vertex,
        /// Original-graph vertex that cannot be reached.
        to: Vertex,
    },
}

define_error_codes! {
    /// Stable codes describing [`RppError`] variants.
    enum RppErrorCode for RppError {
        /// A required edge referenced a vertex outside the graph.
        Graph => Graph { .. } => "RPP_INVALID_GRAPH",
        /// A shortest-path engine failed.
        ShortestPath => ShortestPath { .. } => "RPP_SHORTEST_PATH_FAILURE",
        /// Component labelling failed.
        Connectivity => Connectivity { .. } => "RPP_CONNECTIVITY_FAILURE",
        /// The matching heuristic failed.
        Matching => Matching { .. } => "RPP_MATCHING_FAILURE",
        /// The component spanning tree failed.
        Mst => Mst { .. } => "RPP_MST_FAILURE",
        /// Circuit extraction failed.
        Euler => Euler { .. } => "RPP_EULER_FAILURE",
        /// Two vertices that must be joined are disconnected in the input.
        Unreachable => Unreachable { .. } => "RPP_UNREACHABLE",
    }
}

impl RppError {
    /// Returns the stable code of the component error wrapped by this error,
    /// if any.
    #[must_use]
    pub const fn component_code(&self) -> Option<&'static str> {
        match self {
            Self::Graph { source } => Some(source.code().as_str()),
            Self::ShortestPath { source } => Some(source.code().as_str()),
            Self::Connectivity { source } => Some(source.code().as_str()),
            Self::Matching { source } => Some(source.code().as_str()),
            Self::Mst { source } => Some(source.code().as_str()),
            Self::Euler { source } => Some(source.code().as_str()),
            Self::Unreachable { .. } => None,
        }
    }
}

/// Reasons a rural postman circuit fails verification.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SolutionDefect {
    /// An edge does not start where the previous one ended.
    #[error("edge {position} starts at vertex {found} but the walk is at vertex {expected}")]
    Broken {
        /// Index of the offending edge in the circuit.
        position: usize,
        /// Vertex the previous edge ended at.
        expected: Vertex,
        /// Vertex the offending edge starts at.
        found: Vertex,
    },
    /// The walk does not return to its starting vertex.
    #[error("walk starts at vertex {start} but ends at vertex {end}")]
    NotClosed {
        /// First vertex of the walk.
        start: Vertex,
        /// Last vertex of the walk.
        end: Vertex,
    },
    /// A required edge is never traversed.
    #[error("required edge ({u}, {v}) is not traversed")]
    MissingRequired {
        /// One endpoint of the required edge.
        u: Vertex,
        /// The other endpoint of the required edge.
        v: Vertex,
    },
}

define_error_codes! {
    /// Stable codes describing [`SolutionDefect`] variants.
    enum SolutionDefectCode for SolutionDefect {
        /// Consecutive edges do not chain.
        Broken => Broken { .. } => "SOLUTION_BROKEN_WALK",
        /// The walk is open.
        NotClosed => NotClosed { .. } => "SOLUTION_NOT_CLOSED",
        /// A required edge is missing.
        MissingRequired => MissingRequired { .. } => "SOLUTION_MISSING_REQUIRED",
    }
}
