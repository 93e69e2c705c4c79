//! Algorithm study toolkit: partition sorting and greedy set cover.
//!
//! Provides two independent algorithmic components with a shared
//! measurement harness:
//!
//! - a partition-based quicksort in two pivot-selection variants
//!   (deterministic last-element pivot, uniformly-random pivot), built
//!   for running-time comparison across input sizes;
//! - a greedy set-cover scheduler that assigns teachers to the subjects
//!   they can teach, one teacher per round, largest remaining coverage
//!   first.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `CoverPlan`,
//!   `SubjectAssignment`, `Uncoverable`
//! - **`sort`**: Pivot policies and the partition-sort engine
//! - **`cover`**: Greedy set-cover assignment and roster statistics
//! - **`measure`**: Input generation and averaged wall-clock timing of
//!   the sort variants
//! - **`validation`**: Input integrity checks (duplicate teachers,
//!   malformed records)
//!
//! # Determinism
//!
//! Nothing in this crate touches ambient randomness. Every randomized
//! operation takes a caller-supplied `rand::Rng`, so seeded runs are
//! reproducible and independent calls never interfere.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 7 (Quicksort)
//! - Vazirani (2001), "Approximation Algorithms", Ch. 2 (Set Cover)
//! - Motwani & Raghavan (1995), "Randomized Algorithms", Ch. 1

pub mod cover;
pub mod measure;
pub mod models;
pub mod sort;
pub mod validation;
