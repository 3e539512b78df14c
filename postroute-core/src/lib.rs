//! Postroute core library.
//!
//! Weighted graph primitives, the classic shortest-path engines, and a
//! heuristic solver for the undirected rural postman problem built on them.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod connectivity;
mod error;
mod euler;
mod graph;
mod heap;
mod matching;
mod mst;
mod rpp;
mod shortest_path;
mod topological;

#[cfg(test)]
mod test_utils;

pub use crate::{
    connectivity::ConnectedComponents,
    error::{
        ConnectivityError, ConnectivityErrorCode, EulerError, EulerErrorCode, GraphError,
        GraphErrorCode, HeapError, HeapErrorCode, MatchingError, MatchingErrorCode, MstError,
        MstErrorCode, RppError, RppErrorCode, ShortestPathError, ShortestPathErrorCode,
        SolutionDefect, SolutionDefectCode, TopologicalError, TopologicalErrorCode,
    },
    euler::EulerianCircuit,
    graph::{Arc, Digraph, Edge, Link, LinkId, UndirectedGraph, Vertex, WeightedGraph},
    heap::IndexedMinHeap,
    matching::{MatchingStrategy, PerfectMatching, greedy_matching, vertex_scan_matching},
    mst::{MinimumSpanningForest, prim},
    rpp::{RppSolution, RuralPostman, RuralPostmanBuilder, VertexMap},
    shortest_path::{
        BellmanFord, DagShortestPaths, Dijkstra, DijkstraTrees, FloydWarshall, Johnson,
        Parallelism, ShortestPaths,
    },
    topological::TopologicalOrder,
};
