//! Caller-supplied total orders
//!
//! Heaps in this crate take their ordering as a value implementing [`Comparator`]
//! instead of relying on the element's `Ord` impl. This lets the same element type
//! be ordered differently per heap (for instance as a max-heap via [`ReverseOrder`]),
//! and lets closures act as comparators:
//!
//! ```rust
//! use indexed_heaps::Heap;
//! use indexed_heaps::indexed::IndexedBinaryHeap;
//!
//! // Order strings by length only
//! let mut heap = IndexedBinaryHeap::with_comparator(|a: &String, b: &String| a.len().cmp(&b.len()));
//! heap.push("ccc".to_string()).unwrap();
//! heap.push("a".to_string()).unwrap();
//! assert_eq!(heap.peek().map(String::as_str), Some("a"));
//! ```

use std::cmp::Ordering;

/// A total order over `T`
///
/// Implementations must be consistent: reflexive (`compare(x, x) == Equal`),
/// antisymmetric and transitive. Heaps check reflexivity on insertion and reject
/// elements that fail it; the other laws are the caller's responsibility.
pub trait Comparator<T> {
    /// Compares two elements
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` is ordered before or equal to `b`
    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// Returns true if `a` is strictly ordered before `b`
    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Orders elements by their `Ord` impl (smallest first)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements by the reverse of their `Ord` impl (largest first)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: Ord> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
