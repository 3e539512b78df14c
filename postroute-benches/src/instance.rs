//! Seeded synthetic instances.
//!
//! Instances are square street grids with random integer weights, which keeps
//! every required edge reachable so solver benchmarks never hit
//! `Unreachable`.

use postroute_core::{Edge, UndirectedGraph, Vertex};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Largest generated edge weight.
const MAX_WEIGHT: u8 = 20;

/// Configuration for [`SyntheticInstance::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Vertices per grid side; the grid has `side * side` vertices.
    pub side: usize,
    /// Percentage of grid edges marked as required, in `1..=100`.
    pub required_percent: u8,
    /// Seed for weights and required-edge selection.
    pub seed: u64,
}

/// A street grid plus its required edges.
#[derive(Clone, Debug)]
pub struct SyntheticInstance {
    graph: UndirectedGraph,
    required: Vec<Edge>,
}

impl SyntheticInstance {
    /// Generates a grid instance. At least one edge is always required.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::InvalidParameter`] when `side < 2` or
    /// `required_percent` is outside `1..=100`.
    ///
    /// # Examples
    /// ```
    /// use postroute_benches::instance::{SyntheticConfig, SyntheticInstance};
    ///
    /// let instance = SyntheticInstance::generate(&SyntheticConfig {
    ///     side: 4,
    ///     required_percent: 25,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(instance.graph().vertex_count(), 16);
    /// assert!(!instance.required().is_empty());
    /// # Ok::<(), postroute_benches::error::BenchSetupError>(())
    /// ```
    pub fn generate(config: &SyntheticConfig) -> Result<Self, BenchSetupError> {
        if config.side < 2 {
            return Err(BenchSetupError::InvalidParameter { parameter: "side" });
        }
        if !(1..=100).contains(&config.required_percent) {
            return Err(BenchSetupError::InvalidParameter {
                parameter: "required_percent",
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let side = config.side;
        let mut graph = UndirectedGraph::new(side * side);
        let mut required = Vec::new();
        for row in 0..side {
            for column in 0..side {
                let vertex = row * side + column;
                let mut neighbours: Vec<Vertex> = Vec::with_capacity(2);
                if column + 1 < side {
                    neighbours.push(vertex + 1);
                }
                if row + 1 < side {
                    neighbours.push(vertex + side);
                }
                for neighbour in neighbours {
                    let edge = Edge::new(vertex, neighbour, f64::from(rng.gen_range(1..=MAX_WEIGHT)));
                    graph.add_edge(edge)?;
                    if rng.gen_range(0..100) < config.required_percent {
                        required.push(edge);
                    }
                }
            }
        }
        if required.is_empty() {
            required.extend(graph.edges().first().copied());
        }
        Ok(Self { graph, required })
    }

    /// The full street grid.
    #[must_use]
    pub const fn graph(&self) -> &UndirectedGraph {
        &self.graph
    }

    /// Edges the route must traverse.
    #[must_use]
    pub fn required(&self) -> &[Edge] {
        &self.required
    }
}

/// Builds a complete graph on `vertex_count` vertices with random integer
/// weights, as fed to the matching heuristics during parity repair.
///
/// # Errors
/// Returns [`BenchSetupError::InvalidParameter`] when `vertex_count` is zero
/// or odd.
pub fn complete_graph(vertex_count: usize, seed: u64) -> Result<UndirectedGraph, BenchSetupError> {
    if vertex_count == 0 || vertex_count % 2 == 1 {
        return Err(BenchSetupError::InvalidParameter {
            parameter: "vertex_count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = UndirectedGraph::new(vertex_count);
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            graph.add_edge(Edge::new(u, v, f64::from(rng.gen_range(1..=MAX_WEIGHT))))?;
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::tiny(2, 100)]
    #[case::sparse(6, 10)]
    #[case::dense(5, 60)]
    fn grid_has_expected_shape(#[case] side: usize, #[case] required_percent: u8) {
        let instance = SyntheticInstance::generate(&SyntheticConfig {
            side,
            required_percent,
            seed: 1,
        })
        .expect("valid configuration");
        assert_eq!(instance.graph().vertex_count(), side * side);
        assert_eq!(instance.graph().edge_count(), 2 * side * (side - 1));
        assert!(!instance.required().is_empty());
        assert!(instance.required().len() <= instance.graph().edge_count());
    }

    #[rstest]
    fn generation_is_deterministic_per_seed() {
        let config = SyntheticConfig {
            side: 4,
            required_percent: 30,
            seed: 99,
        };
        let first = SyntheticInstance::generate(&config).expect("valid configuration");
        let second = SyntheticInstance::generate(&config).expect("valid configuration");
        assert_eq!(first.required(), second.required());
        assert_eq!(first.graph().edges(), second.graph().edges());
    }

    #[rstest]
    #[case::side(1, 50, "side")]
    #[case::zero_percent(3, 0, "required_percent")]
    #[case::over_percent(3, 101, "required_percent")]
    fn rejects_invalid_configuration(
        #[case] side: usize,
        #[case] required_percent: u8,
        #[case] expected: &str,
    ) {
        let err = SyntheticInstance::generate(&SyntheticConfig {
            side,
            required_percent,
            seed: 0,
        })
        .expect_err("configuration is invalid");
        assert!(matches!(err, BenchSetupError::InvalidParameter { parameter } if parameter == expected));
    }

    #[rstest]
    #[case::zero(0)]
    #[case::odd(5)]
    fn complete_graph_requires_even_order(#[case] vertex_count: usize) {
        assert!(complete_graph(vertex_count, 0).is_err());
    }

    #[rstest]
    fn complete_graph_has_every_pair() {
        let graph = complete_graph(6, 3).expect("even order");
        assert_eq!(graph.edge_count(), 15);
    }
}
