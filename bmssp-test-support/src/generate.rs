//! Seeded graph generators shared by property tests and benchmarks.
//!
//! Generators emit plain [`GeneratedGraph`] edge triples rather than any
//! solver-side graph type, so consumers build whatever representation they
//! test against. Every generator takes a caller-owned [`SmallRng`] so a
//! failing case can be replayed from its seed alone. Edges are emitted in
//! both directions, which keeps every vertex reachable in the connected
//! topologies no matter which source a test picks.

use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Continuous weight range used by the weighted generators.
const WEIGHT_RANGE: (f64, f64) = (0.1, 100.0);

/// A generated graph: a vertex count and directed `(tail, head, weight)`
/// edge triples with endpoints below the vertex count.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedGraph {
    /// Number of vertices, covering every edge endpoint.
    pub vertex_count: usize,
    /// Directed edges as `(tail, head, weight)` triples.
    pub edges: Vec<(usize, usize, f64)>,
}

impl GeneratedGraph {
    fn empty(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    fn push_undirected(&mut self, a: usize, b: usize, weight: f64) {
        self.edges.push((a, b, weight));
        self.edges.push((b, a, weight));
    }
}

/// Generates a connected sparse graph of `vertex_count` vertices.
///
/// A random spanning path guarantees connectivity; roughly `0.5n` to `n`
/// extra edges are layered on top.
#[must_use]
pub fn connected_sparse(rng: &mut SmallRng, vertex_count: usize) -> GeneratedGraph {
    let mut graph = GeneratedGraph::empty(vertex_count);
    if vertex_count < 2 {
        return graph;
    }

    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    for pair in order.windows(2) {
        graph.push_undirected(pair[0], pair[1], random_weight(rng));
    }

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let a = rng.gen_range(0..vertex_count);
        let b = rng.gen_range(0..vertex_count);
        if a != b {
            graph.push_undirected(a, b, random_weight(rng));
        }
    }
    graph
}

/// Generates a dense graph where most vertex pairs are connected.
#[must_use]
pub fn dense(rng: &mut SmallRng, vertex_count: usize) -> GeneratedGraph {
    let edge_probability = rng.gen_range(0.7..=0.95);
    probabilistic(rng, vertex_count, edge_probability, random_weight)
}

/// Generates a unit-weight graph, the shape of a plain edge-list ingest.
#[must_use]
pub fn unit_weight(rng: &mut SmallRng, vertex_count: usize) -> GeneratedGraph {
    let edge_probability = rng.gen_range(0.2..=0.5);
    probabilistic(rng, vertex_count, edge_probability, |_| 1.0)
}

/// Generates a graph of 2 to 5 mutually unreachable components.
#[must_use]
pub fn disconnected(rng: &mut SmallRng) -> GeneratedGraph {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count).map(|_| rng.gen_range(2..=12)).collect();
    let vertex_count = sizes.iter().sum();
    let mut graph = GeneratedGraph::empty(vertex_count);

    let mut offset = 0;
    for &size in &sizes {
        // Spanning path inside the component only.
        for index in 1..size {
            graph.push_undirected(offset + index - 1, offset + index, random_weight(rng));
        }
        offset += size;
    }
    graph
}

fn probabilistic(
    rng: &mut SmallRng,
    vertex_count: usize,
    edge_probability: f64,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> GeneratedGraph {
    let mut graph = GeneratedGraph::empty(vertex_count);
    for a in 0..vertex_count {
        for b in (a + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                graph.push_undirected(a, b, weight(rng));
            }
        }
    }
    if graph.edges.is_empty() && vertex_count >= 2 {
        graph.push_undirected(0, 1, weight(rng));
    }
    graph
}

fn random_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(WEIGHT_RANGE.0..WEIGHT_RANGE.1)
}
