//! Block-structured frontier for partially ordered vertex batches.
//!
//! The frontier keeps `(vertex, distance)` entries in a deque of
//! capacity-bounded blocks covering non-decreasing distance ranges. Within a
//! block entries are unordered; order is only restored at block granularity,
//! which keeps the three operations cheap:
//!
//! - [`Frontier::insert`] binary-searches the block upper bounds and splits
//!   an overfull block at its median,
//! - [`Frontier::batch_prepend`] sorts the batch once and pushes
//!   capacity-sized blocks at the front (prepended distances are guaranteed
//!   by the driver to lie below everything already stored),
//! - [`Frontier::pull_min_batch`] returns the minimum stored distance and up
//!   to one block's worth of vertices at that distance.
//!
//! The structure may hold several entries for one vertex; a later relaxation
//! makes the older entry stale. Stale entries are harmless because every
//! consumer re-reads the live distance map.

use std::collections::VecDeque;

/// A contiguous run of entries with distances at most `upper`.
#[derive(Clone, Debug)]
struct Block {
    upper: f64,
    entries: Vec<(usize, f64)>,
}

/// Deque of distance-ranged blocks with a global exclusive bound.
#[derive(Clone, Debug)]
pub(crate) struct Frontier {
    blocks: VecDeque<Block>,
    block_capacity: usize,
    bound: f64,
    len: usize,
}

/// One batch pulled from the frontier: the shared minimum distance and the
/// vertices carrying it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MinBatch {
    pub(crate) distance: f64,
    pub(crate) vertices: Vec<usize>,
}

impl Frontier {
    /// Creates an empty frontier with the given block capacity and bound.
    pub(crate) fn new(block_capacity: usize, bound: f64) -> Self {
        debug_assert!(block_capacity >= 1, "blocks must hold at least one entry");
        Self {
            blocks: VecDeque::new(),
            block_capacity,
            bound,
            len: 0,
        }
    }

    /// Returns the number of stored entries.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no entries are stored.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a single entry into the block covering its distance.
    pub(crate) fn insert(&mut self, vertex: usize, distance: f64) {
        if self.blocks.is_empty() {
            self.blocks.push_back(Block {
                upper: self.bound,
                entries: Vec::new(),
            });
        }

        let index = self
            .blocks
            .partition_point(|block| block.upper < distance)
            .min(self.blocks.len() - 1);
        self.blocks[index].entries.push((vertex, distance));
        self.len += 1;

        if self.blocks[index].entries.len() > self.block_capacity {
            self.split_block(index);
        }
    }

    /// Splits block `index` at its distance median, keeping range order.
    fn split_block(&mut self, index: usize) {
        let block = &mut self.blocks[index];
        block
            .entries
            .sort_unstable_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        let mid = block.entries.len() / 2;
        let right_entries = block.entries.split_off(mid);
        let left_upper = block.entries.last().map_or(block.upper, |entry| entry.1);
        let right_upper = block.upper;
        block.upper = left_upper;
        self.blocks.insert(
            index + 1,
            Block {
                upper: right_upper,
                entries: right_entries,
            },
        );
    }

    /// Prepends a batch whose distances all lie below the stored minimum.
    ///
    /// The batch is sorted once and emitted as capacity-sized blocks, so the
    /// cost is `O(m log m)` in the batch size `m`.
    pub(crate) fn batch_prepend(&mut self, mut items: Vec<(usize, f64)>) {
        if items.is_empty() {
            return;
        }
        items.sort_unstable_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        self.len += items.len();
        for chunk in items.chunks(self.block_capacity).rev() {
            let upper = chunk.last().map_or(self.bound, |entry| entry.1);
            self.blocks.push_front(Block {
                upper,
                entries: chunk.to_vec(),
            });
        }
    }

    /// Removes and returns the minimum-distance batch, or `None` when the
    /// structure is exhausted.
    pub(crate) fn pull_min_batch(&mut self) -> Option<MinBatch> {
        while let Some(front) = self.blocks.front() {
            if front.entries.is_empty() {
                self.blocks.pop_front();
            } else {
                break;
            }
        }
        let front = self.blocks.front_mut()?;

        let minimum = front
            .entries
            .iter()
            .map(|entry| entry.1)
            .fold(f64::INFINITY, f64::min);

        let mut vertices = Vec::new();
        let mut index = 0;
        while index < front.entries.len() {
            if front.entries[index].1 == minimum && vertices.len() < self.block_capacity {
                vertices.push(front.entries.swap_remove(index).0);
            } else {
                index += 1;
            }
        }
        vertices.sort_unstable();
        self.len -= vertices.len();

        Some(MinBatch {
            distance: minimum,
            vertices,
        })
    }
}
