//! Sequential Dijkstra oracle for shortest-path verification.
//!
//! Provides a simple, trusted implementation of Dijkstra's algorithm for use
//! as a reference oracle in property tests and benchmarks. It consumes the
//! plain edge triples of a [`GeneratedGraph`] and builds its own adjacency,
//! so it shares no code with any solver under test. Distances are
//! accumulated with left-to-right `f64` addition along each path, so
//! equality comparisons against solver output are exact rather than
//! tolerance-based.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::generate::GeneratedGraph;

#[derive(Clone, Copy, Debug, PartialEq)]
struct HeapEntry {
    distance: f64,
    vertex: usize,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes shortest-path distances from `source` with binary-heap Dijkstra.
///
/// Unreached vertices hold `f64::INFINITY`. An out-of-range source yields an
/// all-infinite map, leaving error-path policy to the caller.
///
/// # Examples
/// ```
/// use bmssp_test_support::generate::GeneratedGraph;
/// use bmssp_test_support::oracle::dijkstra;
///
/// let graph = GeneratedGraph {
///     vertex_count: 3,
///     edges: vec![(0, 1, 1.0), (1, 2, 1.0)],
/// };
/// assert_eq!(dijkstra(&graph, 0), vec![0.0, 1.0, 2.0]);
/// ```
#[must_use]
pub fn dijkstra(graph: &GeneratedGraph, source: usize) -> Vec<f64> {
    let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); graph.vertex_count];
    for &(tail, head, weight) in &graph.edges {
        adjacency[tail].push((head, weight));
    }

    let mut distances = vec![f64::INFINITY; graph.vertex_count];
    if source >= graph.vertex_count {
        return distances;
    }
    distances[source] = 0.0;

    let mut queue = BinaryHeap::new();
    queue.push(Reverse(HeapEntry {
        distance: 0.0,
        vertex: source,
    }));

    while let Some(Reverse(entry)) = queue.pop() {
        if entry.distance > distances[entry.vertex] {
            continue;
        }
        for &(head, weight) in &adjacency[entry.vertex] {
            let candidate = distances[entry.vertex] + weight;
            if candidate < distances[head] {
                distances[head] = candidate;
                queue.push(Reverse(HeapEntry {
                    distance: candidate,
                    vertex: head,
                }));
            }
        }
    }

    distances
}
