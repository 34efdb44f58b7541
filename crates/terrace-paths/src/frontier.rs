use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Reference into the node arena, ordered by accumulated cost for use in a
/// `BinaryHeap`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest cost first;
        // equal costs pop in insertion order.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Min-priority queue of search nodes keyed by accumulated cost.
///
/// No decrease-key: the same cell may sit in the frontier more than once.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, idx: usize, cost: f64) {
        self.heap.push(NodeRef { idx, cost });
    }

    /// Remove and return the cheapest entry.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
