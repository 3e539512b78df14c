//! Property runners comparing the shortest-path engines.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    graph::{Arc, Digraph, Edge, UndirectedGraph},
    shortest_path::{
        BellmanFord, DagShortestPaths, Dijkstra, FloydWarshall, Johnson, ShortestPaths,
    },
};

use super::types::{GraphShape, PathFixture};

fn build(fixture: &PathFixture) -> Result<Digraph, TestCaseError> {
    Digraph::from_arcs(fixture.vertex_count, fixture.arcs.iter().copied())
        .map_err(|err| TestCaseError::fail(format!("fixture is invalid: {err}")))
}

fn fail(context: &str, fixture: &PathFixture) -> impl Fn(crate::ShortestPathError) -> TestCaseError {
    let message = format!(
        "{context} (shape={:?}, vertices={}, arcs={})",
        fixture.shape,
        fixture.vertex_count,
        fixture.arcs.len()
    );
    move |err| TestCaseError::fail(format!("{message}: {err}"))
}

/// Single-source engines agree with both all-pairs engines on every cost.
pub(super) fn run_cost_agreement_property(fixture: &PathFixture) -> TestCaseResult {
    let digraph = build(fixture)?;
    let floyd = FloydWarshall::from_digraph(&digraph);
    let johnson = Johnson::new(&digraph).map_err(fail("johnson failed", fixture))?;
    let bellman = BellmanFord::new(&digraph, fixture.source).map_err(fail("bellman-ford failed", fixture))?;

    let mut single: Vec<Vec<f64>> = vec![bellman.distances().to_vec()];
    match fixture.shape {
        GraphShape::NonNegative | GraphShape::Symmetric => {
            let dijkstra = Dijkstra::new(&digraph, fixture.source)
                .map_err(fail("dijkstra failed", fixture))?;
            single.push(dijkstra.distances().to_vec());
        }
        GraphShape::Acyclic => {
            let dag = DagShortestPaths::new(&digraph, fixture.source)
                .map_err(fail("dag relaxation failed", fixture))?;
            single.push(dag.distances().to_vec());
        }
    }
    if fixture.shape == GraphShape::Symmetric {
        let undirected = UndirectedGraph::from_edges(
            fixture.vertex_count,
            fixture
                .arcs
                .iter()
                .step_by(2)
                .map(|arc| Edge::new(arc.source(), arc.sink(), arc.weight())),
        )
        .map_err(|err| TestCaseError::fail(format!("fixture is invalid: {err}")))?;
        let dijkstra = Dijkstra::new(&undirected, fixture.source)
            .map_err(fail("undirected dijkstra failed", fixture))?;
        single.push(dijkstra.distances().to_vec());
    }

    let expected = &floyd.distance_matrix()[fixture.source];
    let via_johnson = &johnson
        .distance_matrix()
        .map_err(fail("johnson matrix", fixture))?[fixture.source];
    if via_johnson != expected {
        return Err(TestCaseError::fail(format!(
            "johnson={via_johnson:?} floyd={expected:?} (shape={:?})",
            fixture.shape
        )));
    }
    for (engine, distances) in single.iter().enumerate() {
        if distances != expected {
            return Err(TestCaseError::fail(format!(
                "engine #{engine} distances={distances:?} floyd={expected:?} (shape={:?})",
                fixture.shape
            )));
        }
    }
    Ok(())
}

/// No arc can lower its head's distance once an engine has finished, and
/// every reported path costs exactly the reported distance.
pub(super) fn run_relaxation_property(fixture: &PathFixture) -> TestCaseResult {
    let digraph = build(fixture)?;
    let engine = BellmanFord::new(&digraph, fixture.source).map_err(fail("bellman-ford failed", fixture))?;
    let dist = engine.distances();
    check_settled("bellman-ford", digraph.arcs(), dist)?;
    match fixture.shape {
        GraphShape::NonNegative | GraphShape::Symmetric => {
            let dijkstra = Dijkstra::new(&digraph, fixture.source)
                .map_err(fail("dijkstra failed", fixture))?;
            check_settled("dijkstra", digraph.arcs(), dijkstra.distances())?;
            let undirected = UndirectedGraph::from_edges(
                fixture.vertex_count,
                digraph
                    .arcs()
                    .iter()
                    .map(|arc| Edge::new(arc.source(), arc.sink(), arc.weight())),
            )
            .map_err(|err| TestCaseError::fail(format!("fixture is invalid: {err}")))?;
            let both_ways = Dijkstra::new(&undirected, fixture.source)
                .map_err(fail("undirected dijkstra failed", fixture))?;
            let arcs: Vec<Arc> = digraph
                .arcs()
                .iter()
                .flat_map(|arc| [*arc, arc.reversed()])
                .collect();
            check_settled("undirected dijkstra", &arcs, both_ways.distances())?;
        }
        GraphShape::Acyclic => {
            let dag = DagShortestPaths::new(&digraph, fixture.source)
                .map_err(fail("dag relaxation failed", fixture))?;
            check_settled("dag relaxation", digraph.arcs(), dag.distances())?;
        }
    }
    for vertex in 0..fixture.vertex_count {
        let path = engine.path_to(vertex).map_err(fail("path query failed", fixture))?;
        if !engine.reachable(vertex).map_err(fail("reachability", fixture))? {
            continue;
        }
        let cost: f64 = path.iter().map(|arc| arc.weight()).sum();
        if cost != dist[vertex] {
            return Err(TestCaseError::fail(format!(
                "path to {vertex} costs {cost}, distance is {}",
                dist[vertex]
            )));
        }
        let mut at = fixture.source;
        for arc in &path {
            if arc.source() != at {
                return Err(TestCaseError::fail(format!("path to {vertex} is broken at {arc:?}")));
            }
            at = arc.sink();
        }
        if at != vertex {
            return Err(TestCaseError::fail(format!("path to {vertex} ends at {at}")));
        }
    }
    Ok(())
}

fn check_settled(engine: &str, arcs: &[Arc], dist: &[f64]) -> TestCaseResult {
    for arc in arcs {
        if dist[arc.source()] + arc.weight() < dist[arc.sink()] {
            return Err(TestCaseError::fail(format!(
                "{engine}: arc {arc:?} still relaxes: {} + {} < {}",
                dist[arc.source()],
                arc.weight(),
                dist[arc.sink()]
            )));
        }
    }
    Ok(())
}

/// Rebuilding an engine on the same input yields identical arrays.
pub(super) fn run_determinism_property(fixture: &PathFixture) -> TestCaseResult {
    let digraph = build(fixture)?;
    let first = BellmanFord::new(&digraph, fixture.source).map_err(fail("bellman-ford failed", fixture))?;
    let second = BellmanFord::new(&digraph, fixture.source).map_err(fail("bellman-ford failed", fixture))?;
    if first != second {
        return Err(TestCaseError::fail("bellman-ford is not deterministic"));
    }
    if fixture.shape != GraphShape::Acyclic {
        let first = Dijkstra::new(&digraph, fixture.source).map_err(fail("dijkstra failed", fixture))?;
        let second = Dijkstra::new(&digraph, fixture.source).map_err(fail("dijkstra failed", fixture))?;
        if first != second {
            return Err(TestCaseError::fail("dijkstra is not deterministic"));
        }
    }
    Ok(())
}
