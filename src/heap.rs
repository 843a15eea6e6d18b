//! Implicit-tree arithmetic and the identity-to-slot index shared by the
//! heap operations.
//!
//! Slots are 1-based. Slot 0 holds [`SENTINEL_KEY`], so walking up from
//! any occupied slot stops at the root without a separate bounds check.

/// Key stored in slot 0. No real key can compare below it.
pub const SENTINEL_KEY: i64 = i64::MIN;

/// Slot of the root.
pub const ROOT: usize = 1;

#[inline]
pub fn left_child(pos: usize) -> usize {
    pos << 1
}

#[inline]
pub fn right_child(pos: usize) -> usize {
    (pos << 1) + 1
}

#[inline]
pub fn parent(pos: usize) -> usize {
    pos >> 1
}

/// True for the occupied slots that have no children in a heap of `size`.
#[inline]
pub fn is_leaf(pos: usize, size: usize) -> bool {
    pos > size >> 1 && pos <= size
}

/// Positional map: tracks which slot each element id lives in so the heap
/// can find any element in O(1).
///
/// Entries for elements that have left the heap are not cleared. A lookup
/// is only trusted after the heap confirms the recorded slot still holds
/// the same id.
#[derive(Debug, Clone)]
pub struct PositionMap {
    positions: Vec<usize>,
}

impl PositionMap {
    pub fn new(capacity: usize) -> Self {
        PositionMap {
            positions: vec![0; capacity],
        }
    }

    /// Number of element ids this map can address.
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// The last slot recorded for `id`, or `None` if `id` is out of range or
    /// was never placed.
    pub fn get(&self, id: usize) -> Option<usize> {
        match self.positions.get(id).copied() {
            Some(0) | None => None,
            Some(slot) => Some(slot),
        }
    }

    pub fn set(&mut self, id: usize, slot: usize) {
        self.positions[id] = slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_child_is_one_past_left_child() {
        for pos in [1usize, 2, 3, 4, 7, 10, 63, 1000] {
            assert_eq!(left_child(pos), 2 * pos);
            assert_eq!(right_child(pos), 2 * pos + 1);
        }
    }

    #[test]
    fn test_parent_inverts_both_children() {
        for pos in 1..100 {
            assert_eq!(parent(left_child(pos)), pos);
            assert_eq!(parent(right_child(pos)), pos);
        }
        assert_eq!(parent(ROOT), 0);
    }

    #[test]
    fn test_is_leaf() {
        // size 5: slots 1 and 2 have children, 3..=5 do not
        assert!(!is_leaf(1, 5));
        assert!(!is_leaf(2, 5));
        assert!(is_leaf(3, 5));
        assert!(is_leaf(5, 5));
        assert!(!is_leaf(6, 5));
        assert!(is_leaf(1, 1));
    }

    #[test]
    fn test_position_map_unplaced_ids() {
        let mut map = PositionMap::new(3);
        assert_eq!(map.capacity(), 3);
        assert_eq!(map.get(0), None);
        assert_eq!(map.get(3), None);

        map.set(2, 4);
        assert_eq!(map.get(2), Some(4));
    }
}
