//! Common traits for heap data structures
//!
//! Both heaps in this crate implement [`Heap`], so algorithms and tests can be
//! written once against the trait:
//!
//! - [`BinaryHeap`](crate::binary::BinaryHeap): plain array heap, linear-time
//!   `contains` and `remove`
//! - [`IndexedBinaryHeap`](crate::indexed::IndexedBinaryHeap): array heap plus a
//!   position index, constant-time `contains` and logarithmic `remove`
//!
//! Unlike `std::collections::BinaryHeap` these are min-heaps, and the order is a
//! [`Comparator`](crate::compare::Comparator) rather than the element's `Ord` impl.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The comparator does not consider the element equal to itself, so it has
    /// no place in a total order
    IncomparableElement,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::IncomparableElement => {
                write!(f, "element does not compare equal to itself under the heap's order")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-heap priority queues over a single element type
///
/// The element is its own priority. Equal elements may appear any number of times.
///
/// # Example
///
/// ```rust
/// use indexed_heaps::Heap;
/// use indexed_heaps::indexed::IndexedBinaryHeap;
///
/// let mut heap: IndexedBinaryHeap<i32> = IndexedBinaryHeap::new();
/// heap.push(3).unwrap();
/// heap.push(1).unwrap();
/// heap.push(2).unwrap();
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert!(heap.remove(&2));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// Construction is left to each type (comparators need not be `Default`); generic
/// code that needs a fresh heap can ask for `H: Heap<T> + Default`.
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Errors
    /// Returns [`HeapError::IncomparableElement`] if the heap's order cannot place
    /// the element. The heap is left unchanged.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    fn push(&mut self, item: T) -> Result<(), HeapError>;

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Returns true if some element in the heap equals `item`
    ///
    /// # Time Complexity
    /// O(1) average for indexed heaps, O(n) otherwise
    fn contains(&self, item: &T) -> bool;

    /// Removes one element equal to `item`, returning false if there is none
    ///
    /// # Time Complexity
    /// O(log n) for indexed heaps, O(n) otherwise
    fn remove(&mut self, item: &T) -> bool;

    /// Removes all elements, keeping the allocated capacity
    fn clear(&mut self);

    /// Returns true if every parent is ordered before or equal to its children
    ///
    /// Diagnostic only; O(n).
    fn is_min_heap(&self) -> bool;
}
