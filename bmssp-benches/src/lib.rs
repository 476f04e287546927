//! Benchmark support crate for bmssp.
//!
//! Provides parameter types and setup error handling used by Criterion
//! benchmarks comparing the bounded multi-source solver against the
//! reference Dijkstra implementation.

pub mod error;
pub mod params;
