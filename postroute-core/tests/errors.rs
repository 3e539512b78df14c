use postroute_core::{
    EulerError, EulerErrorCode, GraphError, HeapError, HeapErrorCode, MatchingError,
    MatchingErrorCode, MstError, RppError, RppErrorCode, ShortestPathError,
    ShortestPathErrorCode, SolutionDefect, SolutionDefectCode, TopologicalError,
};
use rstest::rstest;

#[rstest]
#[case(HeapError::Underflow, HeapErrorCode::Underflow)]
#[case(HeapError::ItemOutOfRange { item: 9, capacity: 4 }, HeapErrorCode::ItemOutOfRange)]
#[case(HeapError::DuplicateItem { item: 1 }, HeapErrorCode::DuplicateItem)]
#[case(HeapError::MissingItem { item: 1 }, HeapErrorCode::MissingItem)]
#[case(
    HeapError::KeyIncrease { item: 0, current: 1.0, requested: 2.0 },
    HeapErrorCode::KeyIncrease,
)]
fn returns_expected_heap_code(#[case] error: HeapError, #[case] expected: HeapErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), expected.as_str());
}

#[rstest]
#[case(ShortestPathError::NegativeCycle, "SHORTEST_PATH_NEGATIVE_CYCLE")]
#[case(
    ShortestPathError::NegativeWeight { source_vertex: 0, target: 1, weight: -1.0 },
    "SHORTEST_PATH_NEGATIVE_WEIGHT",
)]
#[case(
    ShortestPathError::from(TopologicalError::Cyclic { remaining: 3 }),
    "SHORTEST_PATH_NOT_ACYCLIC",
)]
#[case(
    ShortestPathError::NotSquare { row: 1, expected: 3, actual: 2 },
    "SHORTEST_PATH_NOT_SQUARE",
)]
fn returns_expected_shortest_path_code(#[case] error: ShortestPathError, #[case] code: &str) {
    assert_eq!(error.code().as_str(), code);
}

#[rstest]
fn graph_errors_stay_transparent_inside_shortest_path_errors() {
    let inner = GraphError::VertexOutOfRange {
        vertex: 7,
        vertex_count: 3,
    };
    let wrapped = ShortestPathError::from(inner.clone());
    assert_eq!(wrapped.code(), ShortestPathErrorCode::Graph);
    assert_eq!(wrapped.to_string(), inner.to_string());
}

#[rstest]
#[case(
    RppError::from(MatchingError::OddVertexCount { vertex_count: 3 }),
    RppErrorCode::Matching,
    Some(MatchingErrorCode::OddVertexCount.as_str()),
)]
#[case(
    RppError::from(EulerError::Disconnected { unreachable: 2 }),
    RppErrorCode::Euler,
    Some(EulerErrorCode::Disconnected.as_str()),
)]
#[case(
    RppError::from(MstError::NonFiniteWeight { left: 0, right: 1 }),
    RppErrorCode::Mst,
    Some("MST_NON_FINITE_WEIGHT"),
)]
#[case(
    RppError::from(ShortestPathError::NegativeCycle),
    RppErrorCode::ShortestPath,
    Some("SHORTEST_PATH_NEGATIVE_CYCLE"),
)]
#[case(RppError::Unreachable { from: 0, to: 5 }, RppErrorCode::Unreachable, None)]
fn rpp_errors_expose_component_codes(
    #[case] error: RppError,
    #[case] expected: RppErrorCode,
    #[case] component: Option<&str>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.component_code(), component);
}

#[rstest]
#[case(
    SolutionDefect::Broken { position: 2, expected: 1, found: 4 },
    SolutionDefectCode::Broken,
)]
#[case(SolutionDefect::NotClosed { start: 0, end: 3 }, SolutionDefectCode::NotClosed)]
#[case(SolutionDefect::MissingRequired { u: 1, v: 2 }, SolutionDefectCode::MissingRequired)]
fn returns_expected_solution_defect_code(
    #[case] defect: SolutionDefect,
    #[case] expected: SolutionDefectCode,
) {
    assert_eq!(defect.code(), expected);
}
