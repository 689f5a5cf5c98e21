//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use binary_max_heap::{Heap, MaxHeap};
use proptest::prelude::*;

/// Test that every push and pop leaves a valid heap whose root is the maximum
fn test_push_pop_invariant(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = MaxHeap::new();
    let mut inserted = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !heap.is_empty() {
            let popped = heap.pop().unwrap();
            let expected = inserted.iter().max().copied().unwrap();
            prop_assert_eq!(popped, expected);
            let pos = inserted.iter().position(|&v| v == popped).unwrap();
            inserted.swap_remove(pos);
        } else {
            heap.push(value);
            inserted.push(value);
        }

        prop_assert!(heap.satisfies_heap_property());
        prop_assert_eq!(heap.peek().copied(), inserted.iter().max().copied());
    }

    Ok(())
}

/// Test that all popped elements are in non-increasing order
fn test_pop_order_invariant(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = MaxHeap::new();
    heap.push_all(values.iter().copied());

    let mut drained = Vec::with_capacity(values.len());
    while let Some(x) = heap.pop() {
        drained.push(x);
    }

    let mut expected = values;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    prop_assert_eq!(drained, expected);

    Ok(())
}

/// Test len() is always correct
fn test_len_invariant<H: Heap<i32>>(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    let mut expected_len = 0;

    for (should_pop, value) in ops {
        if should_pop {
            let popped = heap.pop();
            if expected_len == 0 {
                prop_assert!(popped.is_none());
            } else {
                prop_assert!(popped.is_some());
                expected_len -= 1;
            }
        } else {
            heap.push(value);
            expected_len += 1;
        }

        prop_assert_eq!(heap.len(), expected_len);
        prop_assert_eq!(heap.is_empty(), expected_len == 0);
    }

    Ok(())
}

/// Test that the initial capacity never changes observable ordering
fn test_capacity_independence(values: Vec<i32>, capacity: usize) -> Result<(), TestCaseError> {
    let mut plain = MaxHeap::new();
    let mut reserved = MaxHeap::with_capacity(capacity);
    plain.push_all(values.iter().copied());
    reserved.push_all(values.iter().copied());

    prop_assert_eq!(plain.as_slice(), reserved.as_slice());
    prop_assert!(reserved.capacity() >= capacity);

    let plain: Vec<i32> = plain.into_sorted_iter().collect();
    let reserved: Vec<i32> = reserved.into_sorted_iter().collect();
    prop_assert_eq!(plain, reserved);

    Ok(())
}

proptest! {
    #[test]
    fn test_max_heap_push_pop_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_push_pop_invariant(ops)?;
    }

    #[test]
    fn test_max_heap_pop_order_invariant(values in prop::collection::vec(-100i32..100, 0..200)) {
        test_pop_order_invariant(values)?;
    }

    #[test]
    fn test_max_heap_distinct_values_sort(values in prop::collection::hash_set(any::<i32>(), 0..100)) {
        test_pop_order_invariant(values.into_iter().collect())?;
    }

    #[test]
    fn test_max_heap_len_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_len_invariant::<MaxHeap<i32>>(ops)?;
    }

    #[test]
    fn test_max_heap_capacity_independence(
        values in prop::collection::vec(-50i32..50, 0..100),
        capacity in 0usize..256
    ) {
        test_capacity_independence(values, capacity)?;
    }

    #[test]
    fn test_max_heap_shrink_preserves_layout(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut heap: MaxHeap<i32> = values.into_iter().collect();
        let before = heap.as_slice().to_vec();
        heap.shrink_to_fit();
        prop_assert_eq!(heap.as_slice(), before.as_slice());
        prop_assert!(heap.capacity() >= heap.len());
    }
}
