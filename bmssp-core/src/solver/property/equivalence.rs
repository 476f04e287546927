//! Property runners for the solver suite.
//!
//! Oracle equivalence: for any generated graph the solver's distance map is
//! bitwise identical to a sequential Dijkstra oracle. Distances on both
//! sides are produced by left-to-right `f64` additions along a shortest
//! path, so exact equality is the correct comparison.
//!
//! Determinism: two runs over the same input produce bitwise identical
//! maps. Reachability: the source reads zero and exactly the oracle's
//! reachable set is finite.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use bmssp_test_support::oracle::dijkstra;

use crate::test_utils::build_graph;
use crate::{BmsspBuilder, DistanceMap};

use super::types::SolverFixture;

fn solve(fixture: &SolverFixture) -> Result<DistanceMap, TestCaseError> {
    let mut builder = BmsspBuilder::new();
    if let Some(capacity) = fixture.base_capacity {
        builder = builder.with_base_capacity(capacity);
    }
    let solver = builder
        .build()
        .map_err(|e| TestCaseError::fail(format!("builder failed: {e}")))?;
    let graph = build_graph(&fixture.graph);
    solver.run(&graph, fixture.source).map_err(|e| {
        TestCaseError::fail(format!(
            "run failed: {e} (distribution={:?}, vertices={}, source={})",
            fixture.distribution, fixture.graph.vertex_count, fixture.source,
        ))
    })
}

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &SolverFixture) -> TestCaseResult {
    let distances = solve(fixture)?;
    let oracle = dijkstra(&fixture.graph, fixture.source);

    if distances.as_slice() != oracle.as_slice() {
        let first_mismatch = distances
            .as_slice()
            .iter()
            .zip(&oracle)
            .position(|(got, want)| got != want);
        return Err(TestCaseError::fail(format!(
            "distance map diverges from oracle at vertex {first_mismatch:?} \
             (distribution={:?}, vertices={}, source={})",
            fixture.distribution, fixture.graph.vertex_count, fixture.source,
        )));
    }
    Ok(())
}

/// Runs the determinism property: reruns must be bitwise identical.
pub(super) fn run_determinism_property(fixture: &SolverFixture) -> TestCaseResult {
    let first = solve(fixture)?;
    let second = solve(fixture)?;
    if first != second {
        return Err(TestCaseError::fail(format!(
            "rerun produced a different distance map (distribution={:?}, vertices={})",
            fixture.distribution, fixture.graph.vertex_count,
        )));
    }
    Ok(())
}

/// Runs the reachability property: source at zero, unreached stay infinite.
pub(super) fn run_reachability_property(fixture: &SolverFixture) -> TestCaseResult {
    let distances = solve(fixture)?;
    let oracle = dijkstra(&fixture.graph, fixture.source);

    if distances.get(fixture.source) != Some(0.0) {
        return Err(TestCaseError::fail(format!(
            "source distance is {:?}, expected zero",
            distances.get(fixture.source),
        )));
    }

    let reached = distances.reached_count();
    let oracle_reached = oracle.iter().filter(|d| d.is_finite()).count();
    if reached != oracle_reached {
        return Err(TestCaseError::fail(format!(
            "reached {reached} vertices, oracle reached {oracle_reached} \
             (distribution={:?}, vertices={})",
            fixture.distribution, fixture.graph.vertex_count,
        )));
    }
    Ok(())
}
