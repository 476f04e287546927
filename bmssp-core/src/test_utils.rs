//! Shared test utilities for `bmssp-core`.

use bmssp_test_support::generate::GeneratedGraph;
use bmssp_test_support::pbt;
use proptest::test_runner::Config as ProptestConfig;

use crate::Graph;

/// Builds a standard proptest configuration from the shared environment
/// overrides.
///
/// This keeps property suites aligned on the same `BMSSP_PBT_CASES` and
/// `BMSSP_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: pbt::cases(default_cases),
        fork: pbt::fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a [`Graph`] from generated edge triples.
pub(crate) fn build_graph(generated: &GeneratedGraph) -> Graph {
    Graph::from_edges(generated.vertex_count, generated.edges.iter().copied())
        .expect("generated weights are finite and non-negative")
}
