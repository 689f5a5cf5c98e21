//! Binary Max-Heap for Rust
//!
//! An array-backed priority queue that always serves its greatest element
//! first, with O(log n) insertion and removal and O(1) access to the maximum.
//!
//! Among equal elements the ordering is deterministic: a newly pushed
//! element rises past equal ancestors, and when a removal has to choose
//! between two equal children it promotes the left one. See [`max_heap`]
//! for details.
//!
//! # Example
//!
//! ```rust
//! use binary_max_heap::MaxHeap;
//! use std::cmp::Reverse;
//!
//! let mut heap = MaxHeap::new();
//! heap.push_all([17, 50, 32, 93, 8, 9, 69, 4, 26, 19]);
//! assert_eq!(heap.peek(), Some(&93));
//! assert_eq!(heap.pop(), Some(93));
//! assert_eq!(heap.len(), 9);
//!
//! // Min-heap behavior by reversing the ordering
//! let mut min_heap: MaxHeap<Reverse<i32>> = [5, 1, 3].into_iter().map(Reverse).collect();
//! assert_eq!(min_heap.pop(), Some(Reverse(1)));
//! ```

pub mod iter;
pub mod max_heap;
pub mod traits;

pub use max_heap::MaxHeap;
pub use traits::{Heap, HeapError};
