//! Digraph generators for shortest-path property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Arc;

use super::types::{GraphShape, PathFixture};

const MIN_VERTICES: usize = 1;
const MAX_VERTICES: usize = 24;

pub(super) fn path_fixture_strategy() -> impl Strategy<Value = PathFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Builds a fixture for `shape` from `rng`.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> PathFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let arc_count = rng.gen_range(0..=vertex_count * 3);
    let mut arcs = Vec::with_capacity(arc_count * 2);
    for _ in 0..arc_count {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        // Integral weights keep sums exact so engines can be compared with ==.
        match shape {
            GraphShape::NonNegative => {
                arcs.push(Arc::new(u, v, f64::from(rng.gen_range(0_u8..20))));
            }
            GraphShape::Acyclic => {
                if u != v {
                    let weight = f64::from(rng.gen_range(-10_i8..20));
                    arcs.push(Arc::new(u.min(v), u.max(v), weight));
                }
            }
            GraphShape::Symmetric => {
                let weight = f64::from(rng.gen_range(0_u8..20));
                arcs.push(Arc::new(u, v, weight));
                arcs.push(Arc::new(v, u, weight));
            }
        }
    }
    PathFixture {
        vertex_count,
        arcs,
        source: rng.gen_range(0..vertex_count),
        shape,
    }
}
