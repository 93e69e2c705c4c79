//! Greedy set-cover assignment.
//!
//! Assigns teachers to subjects by the classic greedy set-cover
//! heuristic: each round selects the available teacher covering the
//! most still-uncovered subjects. The result is feasible and
//! deterministic, not minimal (set cover is NP-hard; the greedy
//! heuristic is an ln(n)-factor approximation).
//!
//! # Tie-breaking
//!
//! Teachers tied at the round's maximum coverage are ordered by age
//! (youngest wins), then by pool input order (first encountered wins).
//!
//! # References
//!
//! - Vazirani (2001), "Approximation Algorithms", Ch. 2
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 35.3

mod greedy;
mod stats;

pub use greedy::{greedy_cover, missing_subjects, CoverResult};
pub use stats::CoverStats;
