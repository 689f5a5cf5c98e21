//! Common traits for heap data structures
//!
//! - [`Heap`]: the push/peek/pop contract shared by heap containers
//! - [`HeapError`]: failure type for the fallible capacity operations

use std::collections::TryReserveError;
use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// The backing storage could not be grown, either because the requested
    /// capacity overflows or because the allocator refused it
    ReserveFailed(TryReserveError),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::ReserveFailed(err) => write!(f, "heap storage reservation failed: {err}"),
        }
    }
}

impl std::error::Error for HeapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeapError::ReserveFailed(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for HeapError {
    fn from(err: TryReserveError) -> Self {
        HeapError::ReserveFailed(err)
    }
}

/// Base trait for heap/priority queue containers
///
/// Elements are their own priority: `T: Ord` is the ordering contract and
/// the greatest element is served first.
///
/// # Example
///
/// ```rust
/// use binary_max_heap::{Heap, MaxHeap};
///
/// fn drain<H: Heap<i32>>(mut heap: H) -> Vec<i32> {
///     let mut out = Vec::with_capacity(heap.len());
///     while let Some(x) = heap.pop() {
///         out.push(x);
///     }
///     out
/// }
///
/// let mut heap = <MaxHeap<i32> as Heap<i32>>::new();
/// heap.push(3);
/// heap.push(7);
/// heap.push(5);
/// assert_eq!(drain(heap), vec![7, 5, 3]);
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the greatest element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the greatest element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
