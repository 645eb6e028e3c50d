use std::collections::BinaryHeap;

/// Reference into the per-cell tables, ordered by `key` for use in
/// `BinaryHeap`. Equal keys pop in insertion order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) idx: usize,
    pub(crate) key: u64,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key, then oldest.
        other.key.cmp(&self.key).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending cells awaiting expansion.
///
/// A cell may be pushed several times as its cost improves; superseded
/// entries stay in the heap and are skipped by the caller when popped.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, key: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { idx, key, seq });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
