//! Indexed Binary Heaps for Rust
//!
//! This crate provides array-backed binary min-heaps whose order is supplied by a
//! [`Comparator`](compare::Comparator) value rather than fixed by the element type.
//!
//! # Features
//!
//! - **Indexed Binary Heap**: O(log n) push, pop and removal of an arbitrary value;
//!   O(1) containment via a value -> position index
//! - **Binary Heap**: the same operations without the index; containment and
//!   arbitrary removal fall back to O(n) scans
//!
//! Both heaps accept duplicate values and implement the [`Heap`] trait.
//!
//! # Cargo features
//!
//! - `strict-invariants`: re-verify the heap property and the position index after
//!   every mutation. Each operation becomes O(n); intended for debugging. Run the
//!   test suite with the checks on via `cargo test --features strict-invariants`.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::indexed::IndexedBinaryHeap;
//! use indexed_heaps::Heap;
//!
//! let mut heap = IndexedBinaryHeap::new();
//! for value in [5, 3, 8, 1] {
//!     heap.push(value).unwrap();
//! }
//! assert!(heap.contains(&8));
//! assert!(heap.remove(&3));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(5));
//! ```

pub mod binary;
pub mod compare;
pub mod indexed;
mod position_index;
pub mod traits;

// Re-export the main trait for convenience
pub use traits::{Heap, HeapError};
