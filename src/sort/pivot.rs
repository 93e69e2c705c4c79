//! Pivot selection policies.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Pivot selection policy for the partition sort.
///
/// The two variants are equivalent in output; they differ only in the
/// distribution of running time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PivotPolicy {
    /// Always partition on the last element of the active range.
    Last,
    /// Partition on a uniformly drawn element of the active range.
    Random,
}

impl PivotPolicy {
    /// Short label for reports and benchmark IDs.
    pub fn label(&self) -> &'static str {
        match self {
            PivotPolicy::Last => "last-pivot",
            PivotPolicy::Random => "random-pivot",
        }
    }
}

/// Moves the policy's chosen pivot into the last slot of `v`.
///
/// The partition routine always reads its pivot from the last position,
/// so after this call both policies proceed through identical code.
/// `v` must be non-empty.
pub(super) fn place_pivot<T, R: Rng>(v: &mut [T], policy: PivotPolicy, rng: &mut R) {
    if let PivotPolicy::Random = policy {
        let chosen = rng.random_range(0..v.len());
        v.swap(chosen, v.len() - 1);
    }
}
