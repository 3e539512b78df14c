//! Connectivity repair through a spanning tree over components.

use tracing::{Span, debug, field, instrument};

use crate::{
    connectivity::ConnectedComponents,
    error::RppError,
    graph::{Edge, UndirectedGraph, Vertex},
    mst::prim,
    shortest_path::{DijkstraTrees, Parallelism},
};

use super::{VertexMap, connecting_path, working::WorkingGraph};

/// Complete graph whose vertices are the components of G'. Each edge weighs
/// the cheapest shortest-path cost between the two components and remembers
/// the original vertex pair that achieves it.
#[derive(Clone, Debug)]
pub(super) struct ComponentGraph {
    graph: UndirectedGraph,
    connectors: Vec<Option<(Vertex, Vertex)>>,
}

impl ComponentGraph {
    pub(super) fn build(
        components: &ConnectedComponents,
        map: &VertexMap,
        trees: &DijkstraTrees,
    ) -> Result<Self, RppError> {
        let k = components.component_count();
        let mut members = Vec::with_capacity(k);
        for id in 0..k {
            let originals: Vec<Vertex> = components
                .members(id)?
                .into_iter()
                .filter_map(|compact| map.original(compact))
                .collect();
            members.push(originals);
        }

        let mut graph = UndirectedGraph::new(k);
        let mut connectors = vec![None; k * k];
        for a in 0..k {
            for b in (a + 1)..k {
                let mut best = f64::INFINITY;
                let mut pair = None;
                for &s in &members[a] {
                    for &t in &members[b] {
                        let cost = trees.cost(s, t).unwrap_or(f64::INFINITY);
                        if cost < best {
                            best = cost;
                            pair = Some((s, t));
                        }
                    }
                }
                let Some(pair) = pair else {
                    return Err(RppError::Unreachable {
                        from: members[a].first().copied().unwrap_or_default(),
                        to: members[b].first().copied().unwrap_or_default(),
                    });
                };
                graph.add_edge(Edge::new(a, b, best))?;
                connectors[a * k + b] = Some(pair);
            }
        }
        Ok(Self { graph, connectors })
    }

    #[rustfmt::skip]
    pub(super) const fn graph(&self) -> &UndirectedGraph { &self.graph }

    /// Returns the original vertex pair behind a component-graph edge.
    pub(super) fn connector(&self, edge: &Edge) -> Option<(Vertex, Vertex)> {
        let (a, b) = edge.canonical();
        self.connectors
            .get(a * self.graph.vertex_count() + b)
            .copied()
            .flatten()
    }
}

/// Joins the components of G' by splicing in the shortest path behind every
/// edge of a minimum spanning tree of the component graph.
#[instrument(
    name = "rpp.repair_connectivity",
    err,
    skip_all,
    fields(components = components.component_count(), spliced = field::Empty),
)]
pub(super) fn repair_connectivity(
    graph: &UndirectedGraph,
    working: WorkingGraph,
    components: &ConnectedComponents,
    trees: &mut DijkstraTrees,
    parallelism: Parallelism,
) -> Result<WorkingGraph, RppError> {
    trees.extend(graph, working.map().originals(), parallelism)?;
    let component_graph = ComponentGraph::build(components, working.map(), trees)?;
    let forest = prim(component_graph.graph())?;

    let mut spliced = Vec::new();
    for edge in forest.edges() {
        if let Some((from, to)) = component_graph.connector(edge) {
            spliced.extend(connecting_path(graph, trees, from, to)?);
        }
    }
    Span::current().record("spliced", spliced.len());
    debug!(
        tree_weight = forest.total_weight(),
        spliced = spliced.len(),
        "components joined"
    );
    Ok(working.extend(&spliced)?)
}
