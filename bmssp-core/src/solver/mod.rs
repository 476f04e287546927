//! Recursive bounded multi-source shortest-path solver.
//!
//! A level-`l` call receives an exclusive distance bound and a set of seed
//! vertices, and completes vertices whose true distance lies below the bound
//! it returns. Level 0 is a capacity-capped Dijkstra expansion; higher levels
//! split their seeds into pivots and a deferred remainder, drive the pivots
//! through a block-structured [`frontier::Frontier`], and recurse on each
//! pulled batch. All frames share one [`DistanceMap`].

pub(crate) mod frontier;

#[cfg(test)]
mod property;

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, BinaryHeap};

use tracing::trace;

use crate::{distances::DistanceMap, graph::Graph, params::SolverParams};

use self::frontier::Frontier;

/// Outcome of one solver level: the bound below which completion is
/// guaranteed, and the vertices completed by this frame.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LevelOutcome {
    /// Exclusive distance bound certified by this level; never above the
    /// bound the level was called with.
    pub(crate) bound: f64,
    /// Vertices whose distances are final below [`LevelOutcome::bound`].
    pub(crate) completed: BTreeSet<usize>,
}

/// Shared read-only state threaded through the recursion.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SolveContext<'a> {
    pub(crate) graph: &'a Graph,
    pub(crate) params: &'a SolverParams,
}

/// Entry in the base-case expansion queue, ordered by distance then vertex
/// so equal-distance pops are deterministic.
#[derive(Clone, Copy, Debug, PartialEq)]
struct QueueEntry {
    distance: f64,
    vertex: usize,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Splits seeds into pivots (closer half) and the deferred remainder.
///
/// Seeds are ordered by tentative distance with vertex id as the
/// deterministic tie-break; a singleton or empty seed set is all pivots.
pub(crate) fn split_pivots(seeds: &[usize], distances: &DistanceMap) -> (Vec<usize>, Vec<usize>) {
    if seeds.len() <= 1 {
        return (seeds.to_vec(), Vec::new());
    }
    let mut sorted = seeds.to_vec();
    sorted.sort_unstable_by(|&a, &b| {
        distances
            .value(a)
            .total_cmp(&distances.value(b))
            .then_with(|| a.cmp(&b))
    });
    let deferred = sorted.split_off(sorted.len() / 2);
    (sorted, deferred)
}

/// Level-0 expansion: a Dijkstra run over the seed set that stops once more
/// than `base_capacity` vertices have been drawn.
///
/// When the expansion exhausts naturally the input bound stands and every
/// drawn vertex is complete. When it is cut off by the capacity, the largest
/// tentative distance seen becomes the tightened bound and only vertices
/// strictly below it are reported complete.
pub(crate) fn bounded_expand(
    ctx: SolveContext<'_>,
    bound: f64,
    seeds: &[usize],
    distances: &mut DistanceMap,
) -> LevelOutcome {
    let capacity = ctx.params.base_capacity();
    let mut completed: BTreeSet<usize> = seeds.iter().copied().collect();
    let mut queue: BinaryHeap<Reverse<QueueEntry>> = seeds
        .iter()
        .map(|&vertex| {
            Reverse(QueueEntry {
                distance: distances.value(vertex),
                vertex,
            })
        })
        .collect();

    while completed.len() <= capacity {
        let Some(Reverse(entry)) = queue.pop() else {
            break;
        };
        completed.insert(entry.vertex);
        let from = distances.value(entry.vertex);
        for edge in ctx.graph.neighbours(entry.vertex) {
            let candidate = from + edge.weight();
            if candidate < distances.value(edge.target()) && candidate < bound {
                distances.relax(edge.target(), candidate);
                queue.push(Reverse(QueueEntry {
                    distance: candidate,
                    vertex: edge.target(),
                }));
            }
        }
    }

    if completed.len() <= capacity {
        return LevelOutcome { bound, completed };
    }

    let tightened = completed
        .iter()
        .map(|&vertex| distances.value(vertex))
        .fold(f64::NEG_INFINITY, f64::max);
    let completed = completed
        .into_iter()
        .filter(|&vertex| distances.value(vertex) < tightened)
        .collect();
    LevelOutcome {
        bound: tightened,
        completed,
    }
}

/// Runs one recursion level and returns its outcome.
pub(crate) fn solve_level(
    ctx: SolveContext<'_>,
    level: u32,
    bound: f64,
    seeds: &[usize],
    distances: &mut DistanceMap,
) -> LevelOutcome {
    if level == 0 {
        return bounded_expand(ctx, bound, seeds, distances);
    }

    let (pivots, deferred) = split_pivots(seeds, distances);
    trace!(
        level,
        bound,
        pivots = pivots.len(),
        deferred = deferred.len(),
        "descending solver level"
    );

    let mut frontier = Frontier::new(ctx.params.batch_capacity(level), bound);
    for &vertex in &pivots {
        frontier.insert(vertex, distances.value(vertex));
    }

    let boundary = pivots
        .iter()
        .map(|&vertex| distances.value(vertex))
        .fold(bound, f64::min);
    let cap = ctx.params.completion_cap(level);
    let mut completed = BTreeSet::new();

    while completed.len() < cap {
        let Some(batch) = frontier.pull_min_batch() else {
            break;
        };
        let outcome = solve_level(ctx, level - 1, batch.distance, &batch.vertices, distances);
        completed.extend(outcome.completed.iter().copied());

        // Relax out-edges of the newly completed vertices. Targets landing
        // in [batch bound, level bound) re-enter the frontier; targets in
        // [child bound, batch bound) were pulled too early and are carried
        // back to the front in one batch.
        let mut carry = Vec::new();
        for &vertex in &outcome.completed {
            let from = distances.value(vertex);
            for edge in ctx.graph.neighbours(vertex) {
                let candidate = from + edge.weight();
                if distances.relax(edge.target(), candidate) {
                    if batch.distance <= candidate && candidate < bound {
                        frontier.insert(edge.target(), candidate);
                    } else if outcome.bound <= candidate && candidate < batch.distance {
                        carry.push((edge.target(), candidate));
                    }
                }
            }
        }
        for &vertex in &batch.vertices {
            let distance = distances.value(vertex);
            if outcome.bound <= distance && distance < batch.distance {
                carry.push((vertex, distance));
            }
        }
        frontier.batch_prepend(carry);
    }

    let final_bound = boundary.min(bound);
    for &vertex in &deferred {
        if distances.value(vertex) < final_bound {
            completed.insert(vertex);
        }
    }
    trace!(
        level,
        final_bound,
        completed = completed.len(),
        "solver level finished"
    );
    LevelOutcome {
        bound: final_bound,
        completed,
    }
}
