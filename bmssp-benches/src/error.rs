//! Benchmark setup error type.
//!
//! Aggregates the error types that may arise during benchmark data
//! preparation so that setup functions can propagate failures with `?`
//! instead of using `.expect()`.

use bmssp_core::{BmsspError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Solver construction or validation failed.
    #[error("solver setup failed: {0}")]
    Core(#[from] BmsspError),
    /// Graph construction rejected an edge.
    #[error("graph setup failed: {0}")]
    Graph(#[from] GraphError),
}
