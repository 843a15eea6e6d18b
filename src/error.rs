use thiserror::Error;

/// Caller-contract violations reported by [`IndexedMinHeap`](crate::IndexedMinHeap).
///
/// Every variant is raised before the heap touches its arrays, so a failed
/// call leaves the structure exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is full ({capacity} elements)")]
    CapacityExceeded { capacity: usize },
    #[error("element {id} is already in the heap")]
    DuplicateElement { id: usize },
    #[error("element {id} is not in the heap")]
    UnknownElement { id: usize },
    #[error("element {id} is outside the heap's id range [0, {capacity})")]
    ElementOutOfRange { id: usize, capacity: usize },
    #[error("heap is empty")]
    EmptyHeap,
}

/// Failures of the shortest-path search in [`graph`](crate::graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {node} is outside the graph (0..{nodes})")]
    NodeOutOfRange { node: usize, nodes: usize },
    #[error(transparent)]
    Heap(#[from] HeapError),
}

/// A broken structural invariant found by
/// [`IndexedMinHeap::check_invariants`](crate::IndexedMinHeap::check_invariants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("slot {slot} has key {key} below its parent's key {parent_key}")]
    HeapOrder {
        slot: usize,
        key: i64,
        parent_key: i64,
    },
    #[error("element {id} sits in slot {slot} but its position index says {recorded}")]
    PositionIndex {
        id: usize,
        slot: usize,
        recorded: usize,
    },
    #[error("sentinel slot holds key {key} instead of the minimum key")]
    Sentinel { key: i64 },
}
