//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so that Criterion
//! benchmark IDs render consistently across groups.

use std::fmt;

/// Parameters for a shortest-path benchmark run.
#[derive(Clone, Debug)]
pub struct SolverBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
}

impl fmt::Display for SolverBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}
