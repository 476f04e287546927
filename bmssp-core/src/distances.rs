//! The shared tentative-distance map.
//!
//! Every recursion frame of the solver reads and writes the same
//! [`DistanceMap`]. The only mutation primitive is [`DistanceMap::relax`],
//! which accepts strictly smaller values only, so tentative distances are
//! monotonically non-increasing for the lifetime of a run.

/// Sentinel distance for vertices not reached yet.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Tentative distances indexed by vertex id.
///
/// # Examples
/// ```
/// use bmssp_core::{BmsspBuilder, Graph};
///
/// let graph = Graph::from_edges(3, [(0, 1, 1.0)])?;
/// let distances = BmsspBuilder::new().build()?.run(&graph, 0)?;
/// assert_eq!(distances.get(0), Some(0.0));
/// assert_eq!(distances.get(1), Some(1.0));
/// assert_eq!(distances.get(2), Some(bmssp_core::UNREACHABLE));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMap {
    distances: Vec<f64>,
}

impl DistanceMap {
    /// Creates a map of `len` vertices, all [`UNREACHABLE`].
    pub(crate) fn unreachable(len: usize) -> Self {
        Self {
            distances: vec![UNREACHABLE; len],
        }
    }

    /// Returns the number of vertices covered by the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` when the map covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Returns the tentative distance of `vertex`, or `None` out of range.
    #[must_use]
    pub fn get(&self, vertex: usize) -> Option<f64> {
        self.distances.get(vertex).copied()
    }

    /// Returns the number of vertices with a finite distance.
    ///
    /// # Examples
    /// ```
    /// use bmssp_core::{BmsspBuilder, Graph};
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 1.0)])?;
    /// let distances = BmsspBuilder::new().build()?.run(&graph, 0)?;
    /// assert_eq!(distances.reached_count(), 2);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Returns the distances as a slice indexed by vertex id.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.distances
    }

    /// In-range distance read for solver internals.
    pub(crate) fn value(&self, vertex: usize) -> f64 {
        self.distances[vertex]
    }

    /// Lowers the distance of `vertex` to `candidate` when strictly smaller.
    ///
    /// Returns `true` when the map changed.
    pub(crate) fn relax(&mut self, vertex: usize, candidate: f64) -> bool {
        let slot = &mut self.distances[vertex];
        if candidate < *slot {
            *slot = candidate;
            true
        } else {
            false
        }
    }
}
