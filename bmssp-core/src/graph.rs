//! Directed weighted graph representation for the shortest-path solver.
//!
//! Vertices are dense `usize` identifiers. The adjacency vector grows on
//! demand, so a vertex referenced only as an edge head behaves exactly like a
//! vertex listed with an empty edge list.

use crate::error::GraphError;

/// A single outgoing edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    target: usize,
    weight: f64,
}

impl Edge {
    /// Returns the head vertex of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }
}

/// Directed graph with non-negative finite `f64` edge weights.
///
/// # Examples
/// ```
/// use bmssp_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge(0, 1, 2.5)?;
/// graph.add_edge(1, 2, 1.0)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.neighbours(2).len(), 0);
/// # Ok::<(), bmssp_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `count` isolated vertices.
    ///
    /// # Examples
    /// ```
    /// use bmssp_core::Graph;
    ///
    /// let graph = Graph::with_vertices(4);
    /// assert_eq!(graph.vertex_count(), 4);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn with_vertices(count: usize) -> Self {
        let mut adjacency = Vec::new();
        adjacency.resize_with(count, Vec::new);
        Self {
            adjacency,
            edge_count: 0,
        }
    }

    /// Builds a graph from `(source, target, weight)` triples.
    ///
    /// The vertex range covers at least `0..count` and grows to include any
    /// endpoint referenced by an edge.
    ///
    /// # Errors
    /// Returns [`GraphError`] when a weight is negative or non-finite.
    ///
    /// # Examples
    /// ```
    /// use bmssp_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 1.0), (1, 2, 4.0)])?;
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), bmssp_core::GraphError>(())
    /// ```
    pub fn from_edges(
        count: usize,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> core::result::Result<Self, GraphError> {
        let mut graph = Self::with_vertices(count);
        for (source, target, weight) in edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Adds a directed edge, growing the vertex range to cover both endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::NegativeWeight`] for weights below zero and
    /// [`GraphError::NonFiniteWeight`] for NaN or infinite weights.
    pub fn add_edge(
        &mut self,
        source: usize,
        target: usize,
        weight: f64,
    ) -> core::result::Result<(), GraphError> {
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                tail: source,
                target,
            });
        }
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight {
                tail: source,
                target,
                weight,
            });
        }

        let needed = source.max(target).saturating_add(1);
        if self.adjacency.len() < needed {
            self.adjacency.resize_with(needed, Vec::new);
        }
        self.adjacency[source].push(Edge { target, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the outgoing edges of `vertex`, empty for unknown vertices.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }
}
