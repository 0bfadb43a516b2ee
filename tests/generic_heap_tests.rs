//! Generic tests for all Heap implementations
//!
//! Each helper works with any `Heap<i32>` that can be built with `Default`, and the
//! macros at the bottom instantiate every helper for every heap type.

use indexed_heaps::binary::BinaryHeap;
use indexed_heaps::indexed::IndexedBinaryHeap;
use indexed_heaps::Heap;

fn drain<H: Heap<i32>>(heap: &mut H) -> Vec<i32> {
    let mut out = Vec::with_capacity(heap.len());
    while let Some(value) = heap.pop() {
        out.push(value);
    }
    out
}

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
    assert!(!heap.contains(&0));
    assert!(!heap.remove(&0));
    assert!(heap.is_min_heap());
}

/// Insert [5, 3, 8, 1], then pop three times
fn test_basic_operations<H: Heap<i32> + Default>() {
    let mut heap = H::default();

    for value in [5, 3, 8, 1] {
        heap.push(value).unwrap();
    }

    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some(&1));

    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.pop(), Some(5));
    assert_eq!(heap.peek(), Some(&8));
    assert_eq!(heap.len(), 1);
}

/// Insert [4, 4, 4] and remove the copies one at a time
fn test_duplicate_removal<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    for _ in 0..3 {
        heap.push(4).unwrap();
    }

    assert!(heap.contains(&4));
    assert!(heap.remove(&4));
    assert_eq!(heap.len(), 2);
    assert!(heap.contains(&4));

    assert!(heap.remove(&4));
    assert!(heap.remove(&4));
    assert_eq!(heap.len(), 0);
    assert!(!heap.contains(&4));
    assert!(!heap.remove(&4));
}

/// Removing an absent value changes nothing
fn test_remove_missing<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    for value in [7, 2, 9, 4] {
        heap.push(value).unwrap();
    }

    assert!(!heap.remove(&100));
    assert_eq!(heap.len(), 4);
    assert_eq!(drain(&mut heap), vec![2, 4, 7, 9]);
}

/// Remove every element in a scrambled order, checking the heap after each step
fn test_remove_each<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    for i in 0..64 {
        heap.push((i * 37) % 64).unwrap();
    }

    for i in 0..64 {
        let victim = (i * 11) % 64;
        assert!(heap.contains(&victim));
        assert!(heap.remove(&victim));
        assert!(!heap.contains(&victim));
        assert!(heap.is_min_heap());
        assert_eq!(heap.len(), 63 - i as usize);
    }
    assert!(heap.is_empty());
}

/// Interleave pushes, pops and removals
fn test_mixed_operations<H: Heap<i32> + Default>() {
    let mut heap = H::default();

    for i in 0..50 {
        heap.push(100 - i).unwrap();
    }
    for i in (0..50).step_by(3) {
        assert!(heap.remove(&(100 - i)));
    }
    assert!(heap.is_min_heap());

    let first = heap.pop().unwrap();
    heap.push(first - 1).unwrap();
    assert_eq!(heap.peek(), Some(&(first - 1)));

    let drained = drain(&mut heap);
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
}

/// Duplicates mixed with distinct values keep sorted extraction
fn test_many_duplicates<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    for i in 0..90 {
        heap.push(i % 3).unwrap();
    }

    for _ in 0..10 {
        assert!(heap.remove(&1));
    }
    assert!(heap.is_min_heap());

    let drained = drain(&mut heap);
    assert_eq!(drained.iter().filter(|&&v| v == 0).count(), 30);
    assert_eq!(drained.iter().filter(|&&v| v == 1).count(), 20);
    assert_eq!(drained.iter().filter(|&&v| v == 2).count(), 30);
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
}

/// Clearing leaves a usable empty heap
fn test_clear_and_reuse<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    for i in 0..10 {
        heap.push(i).unwrap();
    }

    heap.clear();
    assert!(heap.is_empty());
    assert!(!heap.contains(&3));
    assert_eq!(heap.peek(), None);

    heap.push(42).unwrap();
    heap.push(41).unwrap();
    assert_eq!(heap.pop(), Some(41));
}

/// Peek does not change the heap
fn test_peek_idempotent<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    heap.push(6).unwrap();
    heap.push(2).unwrap();

    for _ in 0..5 {
        assert_eq!(heap.peek(), Some(&2));
    }
    assert_eq!(heap.len(), 2);
}

/// Negative values and extremes order correctly
fn test_extreme_values<H: Heap<i32> + Default>() {
    let mut heap = H::default();
    for value in [0, i32::MAX, -5, i32::MIN, 17] {
        heap.push(value).unwrap();
    }
    assert_eq!(drain(&mut heap), vec![i32::MIN, -5, 0, 17, i32::MAX]);
}

macro_rules! heap_test {
    ($name:ident, $heap:ty, $func:ident) => {
        #[test]
        fn $name() {
            $func::<$heap>();
        }
    };
}

macro_rules! define_heap_tests {
    ($module:ident, $heap:ty) => {
        mod $module {
            use super::*;

            heap_test!(empty, $heap, test_empty_heap);
            heap_test!(basic, $heap, test_basic_operations);
            heap_test!(duplicate_removal, $heap, test_duplicate_removal);
            heap_test!(remove_missing, $heap, test_remove_missing);
            heap_test!(remove_each, $heap, test_remove_each);
            heap_test!(mixed_operations, $heap, test_mixed_operations);
            heap_test!(many_duplicates, $heap, test_many_duplicates);
            heap_test!(clear_and_reuse, $heap, test_clear_and_reuse);
            heap_test!(peek_idempotent, $heap, test_peek_idempotent);
            heap_test!(extreme_values, $heap, test_extreme_values);
        }
    };
}

define_heap_tests!(indexed, IndexedBinaryHeap<i32>);
define_heap_tests!(binary, BinaryHeap<i32>);

#[test]
fn test_heapify_then_poll() {
    let mut heap = IndexedBinaryHeap::from_vec(vec![9, 7, 5, 3, 1]).unwrap();
    assert!(heap.is_min_heap_from(0));
    assert!(heap.is_index_consistent());
    assert_eq!(drain(&mut heap), vec![1, 3, 5, 7, 9]);

    let mut plain = BinaryHeap::from_vec(vec![9, 7, 5, 3, 1]).unwrap();
    assert!(plain.is_min_heap_from(0));
    assert_eq!(drain(&mut plain), vec![1, 3, 5, 7, 9]);
}

#[test]
fn test_heaps_agree() {
    let mut indexed = IndexedBinaryHeap::new();
    let mut plain = BinaryHeap::new();

    for i in 0..200 {
        let value = (i * 7919) % 101;
        indexed.push(value).unwrap();
        plain.push(value).unwrap();
        if i % 5 == 0 {
            let victim = (i * 31) % 101;
            assert_eq!(indexed.remove(&victim), plain.remove(&victim));
        }
        if i % 7 == 0 {
            assert_eq!(indexed.pop(), plain.pop());
        }
        assert_eq!(indexed.peek(), plain.peek());
        assert_eq!(indexed.len(), plain.len());
    }

    assert_eq!(drain(&mut indexed), drain(&mut plain));
}
