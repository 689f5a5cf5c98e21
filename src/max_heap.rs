//! Binary max-heap over a contiguous vector
//!
//! Elements live in a `Vec<T>` laid out as an implicit binary tree: the
//! children of slot `i` are `2i + 1` and `2i + 2`, its parent `(i - 1) / 2`.
//! Every slot is `>=` both of its children, so slot 0 holds a maximum.
//!
//! # Tie-breaks
//!
//! Equal elements are ordered by two fixed rules:
//!
//! - on insertion an element rises past a parent it is *equal* to, so among
//!   duplicates the most recently pushed one sits highest;
//! - on removal the sinking element trades places with a child that is
//!   `>=` it, and when both children qualify and compare equal the left one
//!   is promoted.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use binary_max_heap::MaxHeap;
//!
//! let mut heap = MaxHeap::new();
//! heap.push_all([17, 50, 32, 93, 8]);
//!
//! assert_eq!(heap.peek(), Some(&93));
//! assert_eq!(heap.pop(), Some(93));
//! assert_eq!(heap.pop(), Some(50));
//! assert_eq!(heap.len(), 3);
//! ```

use std::mem;

use log::{debug, trace};

use crate::iter::{IntoSortedIter, Iter};
use crate::traits::{Heap, HeapError};

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right(index: usize) -> usize {
    2 * index + 2
}

/// An array-backed binary max-heap
///
/// A min-heap is obtained by storing [`std::cmp::Reverse`] values.
#[derive(Clone, Debug)]
pub struct MaxHeap<T: Ord> {
    items: Vec<T>,
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty heap without allocating
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty heap with room for at least `capacity` elements
    ///
    /// Only affects allocation; ordering behavior is identical to [`new`](Self::new).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the heap can hold before reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the greatest element, or `None` if the heap is empty
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// The backing storage in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates the elements in storage order, which is not sorted
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.items.iter())
    }

    /// Inserts `item` and restores the heap property above it
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            trace!(
                "heap storage full at {} elements, growing",
                self.items.len()
            );
        }
        let index = self.items.len();
        self.items.push(item);
        self.bubble_up(index);
    }

    /// Pushes every element of `items` in order
    ///
    /// Each element is fully repaired before the next one is appended; there
    /// is no bulk heapify.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let items = items.into_iter();
        self.items.reserve(items.size_hint().0);
        for item in items {
            self.push(item);
        }
    }

    /// Removes and returns the greatest element, or `None` if the heap is empty
    ///
    /// The last element is moved into the root and sunk back into place.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.items.pop()?;
        if self.items.is_empty() {
            return Some(last);
        }
        let top = mem::replace(&mut self.items[0], last);
        self.sink_down(0);
        Some(top)
    }

    /// Drops every element, keeping the allocation
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Fallible counterpart of [`reserve`](Self::reserve)
    ///
    /// # Errors
    /// Returns [`HeapError::ReserveFailed`] if the storage cannot grow, which
    /// includes a requested capacity that overflows.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), HeapError> {
        self.items.try_reserve(additional).map_err(|err| {
            debug!("heap reservation of {additional} failed: {err}");
            HeapError::from(err)
        })
    }

    /// Releases unused capacity; contents and order are untouched
    pub fn shrink_to_fit(&mut self) {
        let before = self.items.capacity();
        self.items.shrink_to_fit();
        if self.items.capacity() != before {
            trace!(
                "heap storage shrunk from {} to {} slots",
                before,
                self.items.capacity()
            );
        }
    }

    /// Consumes the heap, returning the storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Consumes the heap, yielding elements greatest first
    pub fn into_sorted_iter(self) -> IntoSortedIter<T> {
        IntoSortedIter::new(self)
    }

    /// Checks the max-heap property over the whole storage
    ///
    /// # Time Complexity
    /// O(n)
    pub fn satisfies_heap_property(&self) -> bool {
        (1..self.items.len()).all(|i| self.items[parent(i)] >= self.items[i])
    }

    /// Moves the element at `index` towards the root while it is `>=` its parent
    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.items[index] >= self.items[parent] {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `index` towards the leaves along a single path
    fn sink_down(&mut self, mut index: usize) {
        while let Some(child) = self.step_down(index) {
            index = child;
        }
    }

    /// Swaps `index` with the child chosen to replace it, returning that child
    fn step_down(&mut self, index: usize) -> Option<usize> {
        let len = self.items.len();
        let (left, right) = (left(index), right(index));

        let child = if right < len && self.items[right] >= self.items[index] {
            if self.items[left] >= self.items[right] {
                left
            } else {
                right
            }
        } else if left < len && self.items[left] >= self.items[index] {
            left
        } else {
            return None;
        };

        self.items.swap(index, child);
        Some(child)
    }
}

impl<T: Ord> Heap<T> for MaxHeap<T> {
    fn new() -> Self {
        MaxHeap::new()
    }

    fn is_empty(&self) -> bool {
        MaxHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MaxHeap::len(self)
    }

    fn push(&mut self, item: T) {
        MaxHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        MaxHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        MaxHeap::pop(self)
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MaxHeap::new();
        heap.push_all(iter);
        heap
    }
}

impl<T: Ord> IntoIterator for MaxHeap<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the elements in storage order; see
    /// [`into_sorted_iter`](MaxHeap::into_sorted_iter) for greatest-first.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a MaxHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
