//! Strategy builders for solver property-based tests.
//!
//! Wraps the shared seeded generators from `bmssp-test-support` into
//! fixtures with a source vertex and (for the tight-capacity distribution)
//! a builder override.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use bmssp_test_support::generate;

use super::types::{GraphDistribution, SolverFixture};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs (kept smaller to avoid quadratic
/// edge explosion).
const DENSE_MAX_VERTICES: usize = 32;

/// Generates solver fixtures covering all five distributions.
pub(super) fn solver_fixture_strategy() -> impl Strategy<Value = SolverFixture> {
    (any::<GraphDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(
    distribution: GraphDistribution,
    rng: &mut SmallRng,
) -> SolverFixture {
    let (graph, base_capacity) = match distribution {
        GraphDistribution::Sparse => {
            let vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            (generate::connected_sparse(rng, vertices), None)
        }
        GraphDistribution::Dense => {
            let vertices = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            (generate::dense(rng, vertices), None)
        }
        GraphDistribution::UnitWeight => {
            let vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            (generate::unit_weight(rng, vertices), None)
        }
        GraphDistribution::Disconnected => (generate::disconnected(rng), None),
        GraphDistribution::TightCapacity => {
            let vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            (generate::connected_sparse(rng, vertices), Some(1))
        }
    };
    let source = rng.gen_range(0..graph.vertex_count);
    SolverFixture {
        graph,
        source,
        base_capacity,
        distribution,
    }
}

// Proptest `Arbitrary` implementation for `GraphDistribution` is provided
// manually because we want biased weighting (UnitWeight is the most
// important tie-handling stress case).
impl proptest::arbitrary::Arbitrary for GraphDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            3 => Just(Self::UnitWeight),
            2 => Just(Self::Disconnected),
            2 => Just(Self::TightCapacity),
        ]
    }
}
