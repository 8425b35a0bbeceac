use std::collections::BinaryHeap;

/// Heap entry for the open set, ordered for use in `BinaryHeap`.
///
/// `f` is widened to `i64` so `g + h` cannot overflow near the `i32` cell
/// limit. `seq` is the per-search insertion number; it makes the ordering
/// total, so pop order never depends on heap internals.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: i64,
    pub(crate) h: i32,
    pub(crate) seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest first: lowest f,
        // then lowest h (the deeper node), then earliest insertion.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The open set: a priority queue of candidate cells keyed by f-score.
///
/// Relaxing a cell that is already queued pushes a fresh entry instead of
/// updating in place; the superseded entry is skipped lazily when popped,
/// using the node table as the source of truth.
pub(crate) struct Frontier {
    heap: BinaryHeap<OpenEntry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Drop all entries and restart the insertion numbering. Keeps the heap
    /// allocation.
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    pub(crate) fn push(&mut self, idx: usize, f: i64, h: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(OpenEntry { idx, f, h, seq });
    }

    pub(crate) fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }
}
