//! Property-based tests for the recursive solver.
//!
//! Verifies the solver against a sequential Dijkstra oracle, checks
//! bitwise determinism across reruns, and validates the reachability
//! contract across graph topologies with varied weight distributions.

mod equivalence;
mod strategies;
mod types;
