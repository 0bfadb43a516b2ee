//! Binary Heap implementation
//!
//! A plain array-backed binary min-heap with no position index. It implements the
//! full [`Heap`] trait, but `contains` and `remove` have to scan the array.
//!
//! Use this when membership queries and arbitrary removals are rare, or when the
//! element type is not `Hash`. Otherwise prefer
//! [`IndexedBinaryHeap`](crate::indexed::IndexedBinaryHeap).
//!
//! # Time Complexity
//!
//! | Operation  | Complexity         |
//! |------------|--------------------|
//! | `push`     | O(log n) amortized |
//! | `pop`      | O(log n)           |
//! | `peek`     | O(1)               |
//! | `contains` | O(n)               |
//! | `remove`   | O(n)               |
//! | `from_vec` | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::Heap;
//! use indexed_heaps::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.push(3).unwrap();
//! heap.push(1).unwrap();
//! heap.push(2).unwrap();
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::compare::{Comparator, NaturalOrder};
use crate::traits::{Heap, HeapError};
use std::fmt;

/// A binary min-heap without an index
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, C = NaturalOrder> {
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> BinaryHeap<T, NaturalOrder> {
    /// Creates an empty heap ordered by `T`'s `Ord` impl
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }

    /// Builds a heap from `values` in O(n)
    pub fn from_vec(values: Vec<T>) -> Result<Self, HeapError> {
        Self::from_vec_with_comparator(values, NaturalOrder)
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap from `values` in O(n), ordered by `cmp`
    pub fn from_vec_with_comparator(values: Vec<T>, cmp: C) -> Result<Self, HeapError> {
        if values.iter().any(|value| !cmp.compare(value, value).is_eq()) {
            log::debug!("rejecting bulk load: incomparable element");
            return Err(HeapError::IncomparableElement);
        }

        let mut heap = Self { data: values, cmp };
        let len = heap.data.len();
        log::trace!("heapifying {len} elements");
        for i in (0..=(len / 2).saturating_sub(1)).rev() {
            heap.sift_down(i);
        }
        Ok(heap)
    }

    /// Builds a heap by pushing each value in turn, O(n log n)
    pub fn from_iter_incremental<I>(values: I, cmp: C) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        if values.iter().any(|value| !cmp.compare(value, value).is_eq()) {
            log::debug!("rejecting incremental load: incomparable element");
            return Err(HeapError::IncomparableElement);
        }

        let mut heap = Self::with_capacity_and_comparator(values.len(), cmp);
        for value in values {
            heap.insert(value);
        }
        Ok(heap)
    }

    /// Number of elements the backing array holds without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The backing array in storage order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Checks the min-heap property for the subtree rooted at `k`
    pub fn is_min_heap_from(&self, k: usize) -> bool {
        let len = self.data.len();
        if k >= len {
            return true;
        }
        let left = 2 * k + 1;
        let right = 2 * k + 2;
        if left < len && !self.cmp.le(&self.data[k], &self.data[left]) {
            return false;
        }
        if right < len && !self.cmp.le(&self.data[k], &self.data[right]) {
            return false;
        }
        self.is_min_heap_from(left) && self.is_min_heap_from(right)
    }

    /// Appends an already validated `value` and sifts it up
    fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove the element at `i`, refilling the hole from the tail
    fn remove_at(&mut self, i: usize) -> Option<T> {
        if i >= self.data.len() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(i, last);
        let removed = self.data.pop();

        if i != last && self.sift_down(i) == i {
            self.sift_up(i);
        }

        removed
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.cmp.le(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left >= len {
                break;
            }

            let mut smallest = left;
            if right < len && self.cmp.lt(&self.data[right], &self.data[left]) {
                smallest = right;
            }

            if self.cmp.le(&self.data[index], &self.data[smallest]) {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
        index
    }
}

impl<T: PartialEq, C: Comparator<T>> Heap<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) -> Result<(), HeapError> {
        if !self.cmp.compare(&item, &item).is_eq() {
            log::debug!("rejecting push of incomparable element");
            return Err(HeapError::IncomparableElement);
        }
        self.insert(item);
        Ok(())
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    fn contains(&self, item: &T) -> bool {
        self.data.contains(item)
    }

    fn remove(&mut self, item: &T) -> bool {
        match self.data.iter().position(|value| value == item) {
            Some(i) => self.remove_at(i).is_some(),
            None => false,
        }
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn is_min_heap(&self) -> bool {
        self.is_min_heap_from(0)
    }
}

impl<T, C: Comparator<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> TryFrom<Vec<T>> for BinaryHeap<T, NaturalOrder> {
    type Error = HeapError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(values)
    }
}

impl<T: fmt::Display, C> fmt::Display for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
