//! Iterators over [`MaxHeap`]

use std::iter::FusedIterator;
use std::slice;

use crate::max_heap::MaxHeap;

/// Borrowing iterator over a heap in storage order
///
/// Created by [`MaxHeap::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: slice::Iter<'a, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Consuming iterator that pops the heap until it is empty
///
/// Created by [`MaxHeap::into_sorted_iter`]. Elements come out greatest
/// first; equal elements follow the heap's tie-break rules.
#[derive(Clone, Debug)]
pub struct IntoSortedIter<T: Ord> {
    heap: MaxHeap<T>,
}

impl<T: Ord> IntoSortedIter<T> {
    pub(crate) fn new(heap: MaxHeap<T>) -> Self {
        Self { heap }
    }
}

impl<T: Ord> Iterator for IntoSortedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoSortedIter<T> {}

impl<T: Ord> FusedIterator for IntoSortedIter<T> {}
