//! Type definitions for solver property-based tests.
//!
//! Provides the fixture and distribution types used by the graph generation
//! strategies and property functions.

use bmssp_test_support::generate::GeneratedGraph;

/// Topology and weight distribution for generated graphs.
///
/// Controls how graphs are generated, producing inputs that stress
/// different aspects of the solver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphDistribution {
    /// Connected sparse graph with continuous weights.
    Sparse,
    /// Graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Every edge weighs exactly 1.0, stressing equal-distance ties.
    UnitWeight,
    /// Multiple mutually unreachable components.
    Disconnected,
    /// Sparse graph solved with the base capacity forced down to one,
    /// maximising base-case truncations.
    TightCapacity,
}

/// Fixture for solver property tests.
///
/// Captures the graph, the source vertex, the optional capacity override,
/// and the distribution used during generation, providing full context for
/// failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct SolverFixture {
    /// Generated input graph as plain edge triples.
    pub graph: GeneratedGraph,
    /// Source vertex for the run.
    pub source: usize,
    /// Base-capacity override forwarded to the builder, if any.
    pub base_capacity: Option<usize>,
    /// Distribution used during generation.
    pub distribution: GraphDistribution,
}
