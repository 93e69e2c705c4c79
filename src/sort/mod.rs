//! Partition-sort engine.
//!
//! Recursive quicksort over `T: Ord` with a selectable pivot policy:
//! deterministic last-element pivot or uniformly-random pivot. Both
//! policies run the identical Lomuto partition, so measured differences
//! between them come from pivot selection alone.
//!
//! # Complexity
//!
//! Expected O(n log n) for the random policy on any input, and for the
//! last-element policy on random input. Worst case O(n²) when pivot
//! choice repeatedly produces maximally unbalanced partitions, e.g. the
//! last-element policy on already-sorted input. Recursion depth follows
//! the partition balance and is O(n) in that worst case.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 7

mod pivot;
mod quicksort;

pub use pivot::PivotPolicy;
pub use quicksort::{sort_in_place, sort_with};
