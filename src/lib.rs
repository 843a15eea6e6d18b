//! # Indexed Heap
//!
//! A fixed-capacity binary min-heap over caller-assigned element ids, with
//! in-place re-keying, removal by id and O(1) position lookup.
//!
//! ## Modules
//!
//! - `priority_queue`: the [`IndexedMinHeap`] itself
//! - `heap`: implicit-tree index arithmetic and the position map
//! - `trace`: optional observers called around every mutation
//! - `config`: runtime settings for building a heap
//! - `graph`: Dijkstra's shortest paths on top of the heap
//! - `error`: caller-contract violations
//!
//! ## Usage Example
//!
//! ```rust
//! use indexed_heap::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::new(4);
//! heap.insert(4, 0).unwrap();
//! heap.insert(3, 1).unwrap();
//! heap.insert(2, 2).unwrap();
//! heap.insert(1, 3).unwrap();
//!
//! heap.remove(2).unwrap();
//! assert_eq!(heap.remove_min(), Ok(3));
//! assert_eq!(heap.remove_min(), Ok(1));
//! assert_eq!(heap.remove_min(), Ok(0));
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod heap;
pub mod priority_queue;
pub mod trace;

pub use config::HeapConfig;
pub use error::{GraphError, HeapError, InvariantViolation};
pub use priority_queue::IndexedMinHeap;
pub use trace::{HeapObserver, HeapOp, HeapSnapshot, LogTrace, NoTrace, SwitchTrace};
