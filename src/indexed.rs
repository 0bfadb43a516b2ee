//! Indexed Binary Heap implementation
//!
//! A binary min-heap that tracks where every value lives in its backing array.
//! The reverse index turns two linear scans of a plain binary heap into cheap
//! lookups:
//!
//! - `contains` is a hash lookup instead of a scan
//! - `remove` finds its slot through the index, then repairs the heap locally
//!
//! # Time Complexity
//!
//! | Operation   | Complexity         |
//! |-------------|--------------------|
//! | `push`      | O(log n) amortized |
//! | `pop`       | O(log n)           |
//! | `peek`      | O(1)               |
//! | `contains`  | O(1) average       |
//! | `remove`    | O(log n)           |
//! | `from_vec`  | O(n)               |
//! | `clear`     | O(n)               |
//!
//! # Duplicates
//!
//! Equal values may be pushed any number of times. The index keeps every slot
//! holding a value, ascending. When several slots hold the value passed to
//! `remove`, the largest slot is removed. Which copy goes is not observable through
//! the public API since the copies compare equal.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::Heap;
//! use indexed_heaps::indexed::IndexedBinaryHeap;
//!
//! let mut heap: IndexedBinaryHeap<u32> = IndexedBinaryHeap::from_vec(vec![9, 7, 5, 3, 1]).unwrap();
//! assert!(heap.is_min_heap());
//! assert!(heap.contains(&7));
//!
//! assert!(heap.remove(&7));
//! assert!(!heap.contains(&7));
//!
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(3));
//! ```

use crate::compare::{Comparator, NaturalOrder};
use crate::position_index::PositionIndex;
use crate::traits::{Heap, HeapError};
use std::fmt;
use std::hash::Hash;

/// A binary min-heap with a value -> position index
///
/// Values are stored twice: once in the heap array and once as a key of the
/// index, so `T` must be `Clone`. Every swap of two array slots goes through
/// [`swap`](Self::swap), which keeps the index in step with the array.
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<T, C = NaturalOrder> {
    data: Vec<T>,
    index: PositionIndex<T>,
    cmp: C,
}

impl<T: Clone + Eq + Hash + Ord> IndexedBinaryHeap<T, NaturalOrder> {
    /// Creates an empty heap ordered by `T`'s `Ord` impl
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }

    /// Builds a heap from `values` in O(n) using bottom-up heapify
    ///
    /// # Errors
    /// Fails without building anything if any value is incomparable.
    pub fn from_vec(values: Vec<T>) -> Result<Self, HeapError> {
        Self::from_vec_with_comparator(values, NaturalOrder)
    }
}

impl<T: Clone + Eq + Hash, C: Comparator<T>> IndexedBinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            index: PositionIndex::new(),
            cmp,
        }
    }

    /// Builds a heap from `values` in O(n), ordered by `cmp`
    ///
    /// Values are indexed in input order, then every node that has a child is sunk,
    /// starting from the last one and working back to the root.
    pub fn from_vec_with_comparator(values: Vec<T>, cmp: C) -> Result<Self, HeapError> {
        if let Some(bad) = values.iter().position(|value| !is_placeable(&cmp, value)) {
            log::debug!("rejecting bulk load: element at input position {bad} is incomparable");
            return Err(HeapError::IncomparableElement);
        }

        let mut index = PositionIndex::new();
        for (i, value) in values.iter().enumerate() {
            index.add(value.clone(), i);
        }

        let mut heap = Self {
            data: values,
            index,
            cmp,
        };
        heap.heapify();
        heap.check_invariants();
        Ok(heap)
    }

    /// Builds a heap by pushing each value in turn, O(n log n)
    ///
    /// The final arrangement may differ from [`from_vec_with_comparator`](Self::from_vec_with_comparator)
    /// but satisfies the same invariants.
    pub fn from_iter_incremental<I>(values: I, cmp: C) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        if values.iter().any(|value| !is_placeable(&cmp, value)) {
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
    ///
    /// Never decreases on removal.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The backing array in storage order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Number of slots holding a value equal to `value`
    pub fn count(&self, value: &T) -> usize {
        self.index.positions(value).len()
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Checks the min-heap property for the subtree rooted at `k`
    ///
    /// Positions past the end are trivially valid.
    pub fn is_min_heap_from(&self, k: usize) -> bool {
        let len = self.data.len();
        if k >= len {
            return true;
        }

        let left = 2 * k + 1;
        let right = 2 * k + 2;

        if left < len && !self.le(k, left) {
            return false;
        }
        if right < len && !self.le(k, right) {
            return false;
        }

        self.is_min_heap_from(left) && self.is_min_heap_from(right)
    }

    /// Checks that the position index agrees with the heap array
    ///
    /// Every slot must be indexed under its own value, every indexed slot must
    /// hold the value it is indexed under, no value may have an empty position
    /// list, and the number of indexed pairs must equal `len()`.
    pub fn is_index_consistent(&self) -> bool {
        if self.index.pairs() != self.data.len() {
            return false;
        }

        let slots_indexed = self
            .data
            .iter()
            .enumerate()
            .all(|(i, value)| self.index.positions(value).binary_search(&i).is_ok());

        let entries_valid = self.index.iter().all(|(value, positions)| {
            !positions.is_empty()
                && positions
                    .iter()
                    .all(|&p| self.data.get(p).is_some_and(|held| held == value))
        });

        slots_indexed && entries_valid
    }

    /// Places `value` at the end, then swims it into position
    ///
    /// Callers must have validated `value` already.
    fn insert(&mut self, value: T) {
        let slot = self.data.len();
        if slot == self.data.capacity() {
            log::trace!(
                "growing indexed heap storage from {} slots",
                self.data.capacity()
            );
        }
        self.index.add(value.clone(), slot);
        self.data.push(value);
        self.swim(slot);
        self.check_invariants();
    }

    /// Removes the element at slot `i`
    ///
    /// The last element is swapped into `i` and then moved down or up, whichever
    /// restores the heap property. Only one of the two directions can apply.
    fn remove_at(&mut self, i: usize) -> Option<T> {
        if i >= self.data.len() {
            return None;
        }

        let last = self.data.len() - 1;
        self.swap(i, last);

        let removed = self.data.pop()?;
        self.index.remove(&removed, last);

        if i != last {
            // Unmoved is judged by slot, never by value (duplicates)
            if self.sink(i) == i {
                self.swim(i);
            }
        }

        self.check_invariants();
        Some(removed)
    }

    /// Restores the heap property bottom-up over the whole array
    fn heapify(&mut self) {
        let len = self.data.len();
        log::trace!("heapifying {len} elements");
        for i in (0..=(len / 2).saturating_sub(1)).rev() {
            self.sink(i);
        }
    }

    /// Moves the element at `k` up while it is less than or equal to its parent
    ///
    /// Returns the element's final slot.
    fn swim(&mut self, mut k: usize) -> usize {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.le(k, parent) {
                break;
            }
            self.swap(parent, k);
            k = parent;
        }
        k
    }

    /// Moves the element at `k` down while a child is strictly less than it
    ///
    /// Ties between the children go to the left child. Returns the element's final slot.
    fn sink(&mut self, mut k: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * k + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut smallest = left;
            if right < len && self.lt(right, left) {
                smallest = right;
            }

            if self.le(k, smallest) {
                break;
            }

            self.swap(smallest, k);
            k = smallest;
        }
        k
    }

    /// Exchanges two slots and tells the index
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.data.swap(i, j);
        self.index.swap(&self.data[i], &self.data[j], i, j);
    }

    #[inline]
    fn lt(&self, i: usize, j: usize) -> bool {
        self.cmp.lt(&self.data[i], &self.data[j])
    }

    #[inline]
    fn le(&self, i: usize, j: usize) -> bool {
        self.cmp.le(&self.data[i], &self.data[j])
    }

    #[cfg(feature = "strict-invariants")]
    fn check_invariants(&self) {
        assert!(self.is_min_heap_from(0), "heap property violated");
        assert!(self.is_index_consistent(), "position index out of sync");
    }

    #[cfg(not(feature = "strict-invariants"))]
    #[inline(always)]
    fn check_invariants(&self) {}
}

/// An element belongs in a total order only if it compares equal to itself
fn is_placeable<T, C: Comparator<T>>(cmp: &C, value: &T) -> bool {
    cmp.compare(value, value).is_eq()
}

impl<T: Clone + Eq + Hash, C: Comparator<T>> Heap<T> for IndexedBinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) -> Result<(), HeapError> {
        if !is_placeable(&self.cmp, &item) {
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
        self.index.contains(item)
    }

    fn remove(&mut self, item: &T) -> bool {
        match self.index.canonical(item) {
            Some(slot) => self.remove_at(slot).is_some(),
            None => false,
        }
    }

    fn clear(&mut self) {
        self.data.clear();
        self.index.clear();
    }

    fn is_min_heap(&self) -> bool {
        self.is_min_heap_from(0)
    }
}

impl<T: Clone + Eq + Hash, C: Comparator<T> + Default> Default for IndexedBinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone + Eq + Hash + Ord> TryFrom<Vec<T>> for IndexedBinaryHeap<T, NaturalOrder> {
    type Error = HeapError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(values)
    }
}

impl<T: fmt::Display, C> fmt::Display for IndexedBinaryHeap<T, C> {
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
