use std::fmt;

use crate::error::{HeapError, InvariantViolation};
use crate::heap::{is_leaf, left_child, parent, PositionMap, ROOT, SENTINEL_KEY};
use crate::trace::{HeapObserver, HeapOp, HeapSnapshot, NoTrace};

/// A fixed-capacity binary min-heap of `(key, element id)` pairs that can
/// locate, re-key and remove any element by its id.
///
/// Element ids are dense integers in `[0, capacity)` chosen by the caller.
/// Keys and ids are stored in two parallel 1-based arrays; slot 0 is a
/// sentinel. A [`PositionMap`] records the slot of every id and is kept in
/// step with every swap, which gives O(1) lookup and O(log n) update and
/// removal.
///
/// ```
/// use indexed_heap::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::new(4);
/// heap.insert(10, 0).unwrap();
/// heap.insert(20, 1).unwrap();
/// heap.insert(30, 2).unwrap();
///
/// heap.update(5, 2).unwrap();
/// assert_eq!(heap.remove_min(), Ok(2));
/// ```
#[derive(Clone)]
pub struct IndexedMinHeap<O = NoTrace> {
    keys: Vec<i64>,
    elems: Vec<usize>,
    pos: PositionMap,
    size: usize,
    observer: O,
}

impl IndexedMinHeap<NoTrace> {
    /// Create an empty heap able to hold element ids `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        IndexedMinHeap::with_observer(capacity, NoTrace)
    }
}

impl<O: HeapObserver> IndexedMinHeap<O> {
    /// Create an empty heap that reports every mutation to `observer`.
    pub fn with_observer(capacity: usize, observer: O) -> Self {
        let mut keys = vec![0; capacity + 1];
        let mut elems = vec![0; capacity + 1];
        keys[0] = SENTINEL_KEY;
        elems[0] = usize::MAX;
        IndexedMinHeap {
            keys,
            elems,
            pos: PositionMap::new(capacity),
            size: 0,
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Maximum number of elements, which is also the exclusive upper bound
    /// on element ids.
    pub fn capacity(&self) -> usize {
        self.pos.capacity()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether `id` is currently in the heap.
    pub fn contains(&self, id: usize) -> bool {
        self.slot_of(id).is_some()
    }

    /// The current slot of `id`, if it is in the heap.
    pub fn position_of(&self, id: usize) -> Option<usize> {
        self.slot_of(id)
    }

    /// The current key of `id`, if it is in the heap.
    pub fn key_of(&self, id: usize) -> Option<i64> {
        self.slot_of(id).map(|slot| self.keys[slot])
    }

    /// The minimum `(key, id)` pair without removing it.
    pub fn peek_min(&self) -> Option<(i64, usize)> {
        if self.is_empty() {
            None
        } else {
            Some((self.keys[ROOT], self.elems[ROOT]))
        }
    }

    /// Occupied `(key, id)` pairs in slot order (not sorted).
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.snapshot().entries()
    }

    pub fn snapshot(&self) -> HeapSnapshot<'_> {
        let end = self.size + 1;
        HeapSnapshot::new(&self.keys[ROOT..end], &self.elems[ROOT..end])
    }

    /// Add `id` with priority `key`.
    pub fn insert(&mut self, key: i64, id: usize) -> Result<(), HeapError> {
        let op = HeapOp::Insert { key, id };
        self.observe(op, |heap| heap.insert_checked(key, id))
    }

    /// Change the key of `id`, moving it toward the root if the key went down
    /// and toward the leaves if it went up.
    pub fn update(&mut self, key: i64, id: usize) -> Result<(), HeapError> {
        let op = HeapOp::Update { key, id };
        self.observe(op, |heap| heap.update_checked(key, id))
    }

    /// Remove the element with the smallest key and return its id.
    pub fn remove_min(&mut self) -> Result<usize, HeapError> {
        self.observe(HeapOp::RemoveMin, |heap| heap.remove_min_checked())
    }

    /// Remove `id` from wherever it sits in the heap.
    ///
    /// Returns the id that ended up in the vacated last slot, which is `id`.
    pub fn remove(&mut self, id: usize) -> Result<usize, HeapError> {
        self.observe(HeapOp::Remove { id }, |heap| heap.remove_checked(id))
    }

    /// Empty the heap. The backing arrays are kept.
    pub fn clear(&mut self) {
        self.observe(HeapOp::Clear, |heap| heap.size = 0);
    }

    /// Verify heap order, the sentinel and the position index.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.keys[0] != SENTINEL_KEY {
            return Err(InvariantViolation::Sentinel { key: self.keys[0] });
        }
        for slot in ROOT..=self.size {
            let id = self.elems[slot];
            let recorded = self.pos.get(id).unwrap_or(0);
            if recorded != slot {
                return Err(InvariantViolation::PositionIndex {
                    id,
                    slot,
                    recorded,
                });
            }
            let parent_key = self.keys[parent(slot)];
            if slot > ROOT && self.keys[slot] < parent_key {
                return Err(InvariantViolation::HeapOrder {
                    slot,
                    key: self.keys[slot],
                    parent_key,
                });
            }
        }
        Ok(())
    }

    fn observe<T>(&mut self, op: HeapOp, body: impl FnOnce(&mut Self) -> T) -> T {
        self.observer.before(op, &self.snapshot());
        let out = body(self);
        self.observer.after(op, &self.snapshot());
        out
    }

    /// Slot of `id` if the position map entry is still backed by the arrays.
    fn slot_of(&self, id: usize) -> Option<usize> {
        self.pos
            .get(id)
            .filter(|&slot| slot <= self.size && self.elems[slot] == id)
    }

    fn insert_checked(&mut self, key: i64, id: usize) -> Result<(), HeapError> {
        if self.size == self.capacity() {
            log::debug!("insert rejected: heap full");
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        if id >= self.capacity() {
            log::debug!("insert rejected: element {} out of range", id);
            return Err(HeapError::ElementOutOfRange {
                id,
                capacity: self.capacity(),
            });
        }
        if self.contains(id) {
            log::debug!("insert rejected: element {} already present", id);
            return Err(HeapError::DuplicateElement { id });
        }

        self.size += 1;
        let slot = self.size;
        self.keys[slot] = key;
        self.elems[slot] = id;
        self.pos.set(id, slot);
        self.sift_up(slot);
        Ok(())
    }

    fn update_checked(&mut self, key: i64, id: usize) -> Result<(), HeapError> {
        let slot = self.require(id)?;
        let old = self.keys[slot];
        self.keys[slot] = key;
        if key < old {
            self.sift_up(slot);
        } else if key > old {
            self.sift_down(slot);
        }
        Ok(())
    }

    fn remove_min_checked(&mut self) -> Result<usize, HeapError> {
        if self.is_empty() {
            log::debug!("remove_min rejected: heap empty");
            return Err(HeapError::EmptyHeap);
        }
        self.swap(ROOT, self.size);
        self.size -= 1;
        if self.size != 0 {
            self.sift_down(ROOT);
        }
        Ok(self.elems[self.size + 1])
    }

    fn remove_checked(&mut self, id: usize) -> Result<usize, HeapError> {
        let slot = self.require(id)?;
        self.swap(slot, self.size);
        self.size -= 1;
        if slot <= self.size {
            // The former last element can be smaller than its new parent.
            if self.sift_down(slot) == slot {
                self.sift_up(slot);
            }
        }
        Ok(self.elems[self.size + 1])
    }

    fn require(&self, id: usize) -> Result<usize, HeapError> {
        self.slot_of(id).ok_or_else(|| {
            log::debug!("element {} is not in the heap", id);
            HeapError::UnknownElement { id }
        })
    }

    /// Swap two slots and keep the position map in step.
    fn swap(&mut self, a: usize, b: usize) {
        self.keys.swap(a, b);
        self.elems.swap(a, b);
        self.pos.set(self.elems[a], a);
        self.pos.set(self.elems[b], b);
    }

    /// Move the entry at `slot` toward the root while it is smaller than its
    /// parent. Slot 0 holds the minimum key, so the walk stops at the root.
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while self.keys[slot] < self.keys[parent(slot)] {
            self.swap(slot, parent(slot));
            slot = parent(slot);
        }
        slot
    }

    /// Move the entry at `slot` toward the leaves while a child is smaller.
    /// Returns the slot it settled in.
    fn sift_down(&mut self, mut slot: usize) -> usize {
        while !is_leaf(slot, self.size) {
            let mut child = left_child(slot);
            if child < self.size && self.keys[child + 1] < self.keys[child] {
                child += 1;
            }
            if self.keys[slot] <= self.keys[child] {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
        slot
    }
}

impl<O> fmt::Debug for IndexedMinHeap<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.size + 1;
        f.debug_struct("IndexedMinHeap")
            .field("capacity", &self.pos.capacity())
            .field("size", &self.size)
            .field("keys", &&self.keys[ROOT..end])
            .field("elems", &&self.elems[ROOT..end])
            .finish()
    }
}

/// Prints the occupied slots as `(key, id) (key, id) ...`.
impl<O: HeapObserver> fmt::Display for IndexedMinHeap<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}
