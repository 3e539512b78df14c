//! Unit tests for the graph model.

use std::collections::HashSet;

use rstest::rstest;

use crate::error::{GraphError, GraphErrorCode};

use super::{Arc, Digraph, Edge, Link, UndirectedGraph};

fn path_graph() -> UndirectedGraph {
    UndirectedGraph::from_edges(
        4,
        [
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 2.0),
            Edge::new(2, 3, 3.0),
        ],
    )
    .expect("edges are in range")
}

#[rstest]
#[case::same_orientation(Edge::new(0, 1, 2.0), Edge::new(0, 1, 2.0), true)]
#[case::flipped(Edge::new(1, 0, 2.0), Edge::new(0, 1, 2.0), true)]
#[case::different_weight(Edge::new(0, 1, 2.0), Edge::new(0, 1, 3.0), false)]
#[case::different_pair(Edge::new(0, 2, 2.0), Edge::new(0, 1, 2.0), false)]
fn edge_equality_ignores_orientation(#[case] left: Edge, #[case] right: Edge, #[case] equal: bool) {
    assert_eq!(left == right, equal);
}

#[test]
fn edge_hash_ignores_orientation() {
    let set: HashSet<Edge> = [Edge::new(2, 5, 1.5), Edge::new(5, 2, 1.5)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn edges_sort_by_weight_then_endpoints() {
    let mut edges = vec![
        Edge::new(3, 2, 1.0),
        Edge::new(0, 4, 0.5),
        Edge::new(1, 2, 1.0),
        Edge::new(2, 1, 0.5),
    ];
    edges.sort();
    let canonical: Vec<_> = edges.iter().map(Edge::canonical).collect();
    assert_eq!(canonical, vec![(0, 4), (1, 2), (1, 2), (2, 3)]);
}

#[rstest]
#[case::from_stored_start(4, Some(7))]
#[case::from_stored_end(7, Some(4))]
#[case::not_an_endpoint(5, None)]
fn other_endpoint(#[case] vertex: usize, #[case] expected: Option<usize>) {
    let edge = Edge::new(4, 7, 1.0);
    assert_eq!(edge.other(vertex), expected);
}

#[test]
fn leaving_orients_edges_but_not_arcs() {
    let edge = Edge::new(4, 7, 1.0);
    assert_eq!(edge.leaving(7).endpoints(), (7, 4));
    assert_eq!(edge.leaving(4).endpoints(), (4, 7));
    let arc = Arc::new(4, 7, 1.0);
    assert_eq!(arc.leaving(7), arc);
}

#[test]
fn undirected_adjacency_reports_both_endpoints() {
    let graph = path_graph();
    assert_eq!(graph.edge_count(), 3);
    let around_one: Vec<_> = graph
        .adjacent(1)
        .expect("vertex 1 exists")
        .map(Edge::canonical)
        .collect();
    assert_eq!(around_one, vec![(0, 1), (1, 2)]);
}

#[test]
fn adjacency_is_restartable() {
    let graph = path_graph();
    let iter = graph.adjacent(2).expect("vertex 2 exists");
    assert_eq!(iter.clone().count(), 2);
    assert_eq!(iter.count(), 2);
}

#[rstest]
#[case::one_past_end(4)]
#[case::far_out(usize::MAX)]
fn out_of_range_vertices_fail_fast(#[case] vertex: usize) {
    let graph = path_graph();
    let err = graph.degree(vertex).expect_err("vertex is out of range");
    assert_eq!(err.code(), GraphErrorCode::VertexOutOfRange);
    assert!(graph.adjacent(vertex).is_err());
    assert!(graph.check_vertex(vertex).is_err());
}

#[test]
fn add_edge_rejects_out_of_range_endpoint() {
    let mut graph = UndirectedGraph::new(2);
    let err = graph
        .add_edge(Edge::new(0, 2, 1.0))
        .expect_err("vertex 2 does not exist");
    assert_eq!(
        err,
        GraphError::VertexOutOfRange {
            vertex: 2,
            vertex_count: 2
        }
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn add_edge_rejects_nan_weight() {
    let mut graph = UndirectedGraph::new(2);
    let err = graph
        .add_edge(Edge::new(0, 1, f64::NAN))
        .expect_err("NaN weights are rejected");
    assert_eq!(err.code().as_str(), "GRAPH_NAN_WEIGHT");
}

#[test]
fn self_loops_count_twice_towards_degree() {
    let mut graph = UndirectedGraph::new(2);
    graph.add_edge(Edge::new(0, 0, 1.0)).expect("in range");
    graph.add_edge(Edge::new(0, 1, 1.0)).expect("in range");
    assert_eq!(graph.degree(0).expect("in range"), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.odd_vertices(), vec![0, 1]);
}

#[rstest]
#[case::empty(UndirectedGraph::new(0), true)]
#[case::single_vertex(UndirectedGraph::new(1), true)]
#[case::path(path_graph(), false)]
fn parity(#[case] graph: UndirectedGraph, #[case] even: bool) {
    assert_eq!(graph.is_even(), even);
}

#[test]
fn digraph_adjacency_is_outgoing_only() {
    let digraph = Digraph::from_arcs(3, [Arc::new(0, 1, 1.0), Arc::new(2, 0, 5.0)])
        .expect("arcs are in range");
    assert_eq!(digraph.out_degree(0).expect("in range"), 1);
    assert_eq!(digraph.out_degree(1).expect("in range"), 0);
    assert_eq!(digraph.in_degrees(), vec![1, 1, 0]);
    let from_two: Vec<_> = digraph.adjacent(2).expect("in range").copied().collect();
    assert_eq!(from_two, vec![Arc::new(2, 0, 5.0)]);
}

#[test]
fn reversed_digraph_inverts_every_arc() {
    let digraph = Digraph::from_arcs(3, [Arc::new(0, 1, 1.0), Arc::new(1, 2, 2.0)])
        .expect("arcs are in range");
    let reversed = digraph.reversed();
    assert_eq!(reversed.arcs(), &[Arc::new(1, 0, 1.0), Arc::new(2, 1, 2.0)]);
    assert_eq!(reversed.out_degree(2).expect("in range"), 1);
    assert_eq!(reversed.reversed(), digraph);
}

#[test]
fn cost_matrix_keeps_cheapest_parallel_arc() {
    let digraph = Digraph::from_arcs(
        3,
        [Arc::new(0, 1, 4.0), Arc::new(0, 1, 2.5), Arc::new(2, 0, -1.0)],
    )
    .expect("arcs are in range");
    let matrix = digraph.cost_matrix();
    assert_eq!(matrix[0], vec![0.0, 2.5, f64::INFINITY]);
    assert_eq!(matrix[1], vec![f64::INFINITY, 0.0, f64::INFINITY]);
    assert_eq!(matrix[2], vec![-1.0, f64::INFINITY, 0.0]);
}
