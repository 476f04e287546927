//! Builder utilities for configuring the solver.
//!
//! Validates configuration before constructing [`Bmssp`] instances; invalid
//! values are rejected at [`BmsspBuilder::build`] time rather than at run
//! time.

use std::num::NonZeroUsize;

use crate::{Result, bmssp::Bmssp, error::BmsspError};

/// Configures and constructs [`Bmssp`] instances.
///
/// By default every parameter is derived from the graph at run time; the
/// only override exposed is the level-0 expansion capacity.
///
/// # Examples
/// ```
/// use bmssp_core::BmsspBuilder;
///
/// let solver = BmsspBuilder::new()
///     .with_base_capacity(8)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(solver.base_capacity().map(|k| k.get()), Some(8));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BmsspBuilder {
    base_capacity: Option<usize>,
}

impl BmsspBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use bmssp_core::BmsspBuilder;
    ///
    /// let builder = BmsspBuilder::new();
    /// assert_eq!(builder.base_capacity(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the level-0 expansion capacity.
    ///
    /// # Examples
    /// ```
    /// use bmssp_core::BmsspBuilder;
    ///
    /// let builder = BmsspBuilder::new().with_base_capacity(2);
    /// assert_eq!(builder.base_capacity(), Some(2));
    /// ```
    #[must_use]
    pub fn with_base_capacity(mut self, capacity: usize) -> Self {
        self.base_capacity = Some(capacity);
        self
    }

    /// Returns the configured capacity override, if any.
    #[must_use]
    pub fn base_capacity(&self) -> Option<usize> {
        self.base_capacity
    }

    /// Validates the configuration and constructs a [`Bmssp`] instance.
    ///
    /// # Errors
    /// Returns [`BmsspError::InvalidBaseCapacity`] when a zero capacity
    /// override was supplied.
    ///
    /// # Examples
    /// ```
    /// use bmssp_core::{BmsspBuilder, BmsspError};
    ///
    /// let err = BmsspBuilder::new()
    ///     .with_base_capacity(0)
    ///     .build()
    ///     .expect_err("zero capacity must be rejected");
    /// assert!(matches!(err, BmsspError::InvalidBaseCapacity { got: 0 }));
    /// ```
    pub fn build(self) -> Result<Bmssp> {
        let base_capacity = match self.base_capacity {
            Some(raw) => Some(
                NonZeroUsize::new(raw).ok_or(BmsspError::InvalidBaseCapacity { got: raw })?,
            ),
            None => None,
        };
        Ok(Bmssp::new(base_capacity))
    }
}
