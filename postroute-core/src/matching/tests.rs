//! Unit and property tests for the matching heuristics.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;
use test_strategy::Arbitrary;

use crate::{
    error::{MatchingError, MatchingErrorCode},
    graph::UndirectedGraph,
    test_utils::{complete_graph, graph_from, suite_proptest_config},
};

use super::{MatchingStrategy, PerfectMatching, greedy_matching, vertex_scan_matching};

#[derive(Clone, Copy, Debug, Arbitrary)]
enum Heuristic {
    Greedy,
    VertexScan,
}

fn run(heuristic: Heuristic, graph: &UndirectedGraph, seed: u64) -> Result<PerfectMatching, MatchingError> {
    match heuristic {
        Heuristic::Greedy => greedy_matching(graph),
        Heuristic::VertexScan => vertex_scan_matching(graph, &mut SmallRng::seed_from_u64(seed)),
    }
}

fn assert_perfect(graph: &UndirectedGraph, matching: &PerfectMatching) -> Result<(), String> {
    let n = graph.vertex_count();
    if matching.len() * 2 != n {
        return Err(format!("expected {} pairs, got {}", n / 2, matching.len()));
    }
    let mut covered = vec![false; n];
    for edge in matching.edges() {
        if !graph.edges().contains(edge) {
            return Err(format!("{edge:?} is not an edge of the graph"));
        }
        let (u, v) = edge.endpoints();
        if u == v || covered[u] || covered[v] {
            return Err(format!("{edge:?} reuses a vertex"));
        }
        covered[u] = true;
        covered[v] = true;
    }
    Ok(())
}

fn distance_weights(u: usize, v: usize) -> f64 {
    u.abs_diff(v) as f64
}

#[test]
fn default_strategy_is_greedy() {
    assert_eq!(MatchingStrategy::default(), MatchingStrategy::Greedy);
}

#[rstest]
#[case::greedy(Heuristic::Greedy)]
#[case::vertex_scan(Heuristic::VertexScan)]
fn rejects_odd_vertex_counts(#[case] heuristic: Heuristic) {
    let graph = complete_graph(3, distance_weights);
    assert_eq!(
        run(heuristic, &graph, 7),
        Err(MatchingError::OddVertexCount { vertex_count: 3 })
    );
}

#[rstest]
#[case::greedy(Heuristic::Greedy)]
#[case::vertex_scan(Heuristic::VertexScan)]
fn rejects_incomplete_graphs(#[case] heuristic: Heuristic) {
    let graph = graph_from(4, &[(0, 1, 1.0), (2, 3, 1.0), (0, 2, 1.0), (1, 3, 1.0), (0, 3, 1.0)]);
    let err = run(heuristic, &graph, 7).expect_err("edge {1, 2} is missing");
    assert_eq!(err, MatchingError::NotComplete { vertex: 1, missing: 2 });
    assert_eq!(err.code(), MatchingErrorCode::NotComplete);
}

#[rstest]
#[case::greedy(Heuristic::Greedy)]
#[case::vertex_scan(Heuristic::VertexScan)]
fn empty_graph_has_empty_matching(#[case] heuristic: Heuristic) {
    let matching = run(heuristic, &UndirectedGraph::new(0), 7).expect("trivially complete");
    assert!(matching.is_empty());
}

#[test]
fn greedy_takes_cheapest_edges_first() {
    // On a line metric greedy pairs neighbours from the left.
    let graph = complete_graph(6, distance_weights);
    let matching = greedy_matching(&graph).expect("complete and even");
    let pairs: Vec<_> = matching.edges().iter().map(|edge| edge.canonical()).collect();
    assert_eq!(pairs, vec![(0, 1), (2, 3), (4, 5)]);
    assert_eq!(matching.total_weight(), 3.0);
}

#[test]
fn greedy_is_not_fooled_by_parallel_edges() {
    let graph = graph_from(2, &[(0, 1, 9.0), (1, 0, 2.0), (0, 0, 0.5)]);
    let matching = greedy_matching(&graph).expect("complete and even");
    assert_eq!(matching.total_weight(), 2.0);
}

#[test]
fn vertex_scan_is_reproducible_with_a_seed() {
    let graph = complete_graph(12, |u, v| ((u * 7 + v * 13) % 17) as f64);
    let first = vertex_scan_matching(&graph, &mut SmallRng::seed_from_u64(99)).expect("valid");
    let second = vertex_scan_matching(&graph, &mut SmallRng::seed_from_u64(99)).expect("valid");
    assert_eq!(first, second);
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn heuristics_return_perfect_matchings(
        heuristic in any::<Heuristic>(),
        half in 0usize..12,
        weights in prop::collection::vec(0.0f64..100.0, 0..300),
        seed in any::<u64>(),
    ) {
        let n = half * 2;
        let graph = complete_graph(n, |u, v| {
            weights.get(u * n + v).copied().unwrap_or((u + v) as f64)
        });
        let matching = run(heuristic, &graph, seed)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        assert_perfect(&graph, &matching).map_err(TestCaseError::fail)?;
    }
}
