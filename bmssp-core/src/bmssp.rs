//! Top-level solver entry point.
//!
//! Validates the graph and source, derives the recursion parameters, seeds
//! the top level with the source and its out-neighbours, and hands off to
//! the recursive driver.

use tracing::{debug, instrument, warn};

use crate::{
    Result,
    distances::DistanceMap,
    error::BmsspError,
    graph::Graph,
    params::SolverParams,
    solver::{SolveContext, solve_level},
};
use std::num::NonZeroUsize;

/// Single-source shortest-path solver over a shared tentative-distance map.
///
/// # Examples
/// ```
/// use bmssp_core::{BmsspBuilder, Graph};
///
/// let graph = Graph::from_edges(3, [(0, 1, 1.0), (0, 2, 4.0), (1, 2, 1.0)])?;
/// let solver = BmsspBuilder::new().build()?;
/// let distances = solver.run(&graph, 0)?;
/// assert_eq!(distances.get(2), Some(2.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Bmssp {
    base_capacity: Option<NonZeroUsize>,
}

impl Bmssp {
    pub(crate) fn new(base_capacity: Option<NonZeroUsize>) -> Self {
        Self { base_capacity }
    }

    /// Returns the configured level-0 capacity override, if any.
    #[must_use]
    pub fn base_capacity(&self) -> Option<NonZeroUsize> {
        self.base_capacity
    }

    /// Computes shortest-path distances from `source` to every vertex.
    ///
    /// Unreached vertices keep the [`crate::UNREACHABLE`] sentinel.
    ///
    /// # Errors
    /// Returns [`BmsspError::EmptyGraph`] when the graph has no vertices and
    /// [`BmsspError::UnknownSource`] when `source` is outside the vertex
    /// range. No partial distance map is produced on error.
    ///
    /// # Examples
    /// ```
    /// use bmssp_core::{BmsspBuilder, BmsspError, Graph};
    ///
    /// let solver = BmsspBuilder::new().build()?;
    /// let graph = Graph::with_vertices(2);
    /// let err = solver.run(&graph, 7).expect_err("source is unknown");
    /// assert!(matches!(err, BmsspError::UnknownSource { vertex: 7, .. }));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn run(&self, graph: &Graph, source: usize) -> Result<DistanceMap> {
        let vertices = graph.vertex_count();
        self.run_with_len(graph, source, vertices)
    }

    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            vertices = vertices,
            edges = graph.edge_count(),
            source = source,
            base_capacity = ?self.base_capacity
        ),
    )]
    fn run_with_len(&self, graph: &Graph, source: usize, vertices: usize) -> Result<DistanceMap> {
        if vertices == 0 {
            warn!("graph is empty, returning error");
            return Err(BmsspError::EmptyGraph);
        }
        if source >= vertices {
            return Err(BmsspError::UnknownSource {
                vertex: source,
                vertex_count: vertices,
            });
        }

        let params =
            SolverParams::derive(vertices, self.base_capacity.map(NonZeroUsize::get));
        let mut distances = DistanceMap::unreachable(vertices);
        distances.relax(source, 0.0);

        // Seed the top level with the source and its out-neighbours; the
        // neighbours still carry the sentinel distance at this point.
        let mut seeds = vec![source];
        seeds.extend(graph.neighbours(source).iter().map(|edge| edge.target()));
        seeds.sort_unstable();
        seeds.dedup();

        let ctx = SolveContext {
            graph,
            params: &params,
        };
        let outcome = solve_level(ctx, params.depth(), f64::INFINITY, &seeds, &mut distances);
        debug!(
            completed = outcome.completed.len(),
            reached = distances.reached_count(),
            "solver run finished"
        );
        Ok(distances)
    }
}
