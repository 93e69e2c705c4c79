//! Recursive partition sort with a shared Lomuto partition.
//!
//! # Algorithm
//!
//! 1. Ranges of length ≤ 1 are already sorted.
//! 2. The pivot policy places its pivot in the last slot
//!    (`place_pivot`); the random policy swaps a uniformly drawn
//!    element there, the last-element policy leaves the slice as is.
//! 3. Lomuto partition: scan left to right, growing the prefix of
//!    elements `<=` the pivot, then swap the pivot behind that prefix.
//!    The pivot lands at its final sorted position.
//! 4. Recurse on the ranges left and right of the pivot.

use rand::Rng;

use super::pivot::{PivotPolicy, place_pivot};

/// Sorts a copy of `input` in non-decreasing order and returns it.
///
/// The input is never mutated; each call works on a private copy, so
/// repeated timed calls are independent. Randomness comes solely from
/// the caller's `rng`, which makes seeded runs reproducible.
pub fn sort_with<T, R>(input: &[T], policy: PivotPolicy, rng: &mut R) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng,
{
    let mut v = input.to_vec();
    sort_in_place(&mut v, policy, rng);
    v
}

/// Sorts a caller-owned slice in place.
pub fn sort_in_place<T, R>(v: &mut [T], policy: PivotPolicy, rng: &mut R)
where
    T: Ord,
    R: Rng,
{
    if v.len() <= 1 {
        return;
    }

    place_pivot(v, policy, rng);
    let p = partition(v);

    let (left, right) = v.split_at_mut(p);
    sort_in_place(left, policy, rng);
    sort_in_place(&mut right[1..], policy, rng);
}

/// Lomuto partition around the last element.
///
/// Returns the pivot's final index. The `<=` comparison keeps runs of
/// duplicates on the pivot's left, which makes all-equal inputs correct
/// (though maximally unbalanced).
fn partition<T: Ord>(v: &mut [T]) -> usize {
    let high = v.len() - 1;
    let mut boundary = 0;

    for j in 0..high {
        if v[j] <= v[high] {
            v.swap(boundary, j);
            boundary += 1;
        }
    }

    v.swap(boundary, high);
    boundary
}
