//! Wall-clock measurement of the sort variants.
//!
//! Generates random workloads and times both pivot policies over the
//! same inputs, averaging several repetitions per array size. The
//! resulting report is plain serializable data: a `(size, average
//! duration)` series per policy, ready for an external plotting or
//! reporting consumer.
//!
//! Timing here is coarse wall-clock averaging. For statistically
//! sound measurements use the criterion bench
//! (`benches/sort_comparison.rs`); this module reproduces the simple
//! averaged-loop comparison the study is built around.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sort::{PivotPolicy, sort_with};

/// Default number of timed repetitions per measurement.
pub const DEFAULT_ITERATIONS: usize = 5;

/// Generates a random test sequence with values uniform in `1..=1_000_000`.
pub fn random_sequence<R: Rng>(len: usize, rng: &mut R) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(1..=1_000_000)).collect()
}

/// Average wall-clock time to sort `input` under `policy`.
///
/// Runs `iterations` repetitions, each on a fresh copy of the input,
/// and returns the mean elapsed time. An `iterations` of zero is
/// treated as one.
pub fn time_sort<R: Rng>(
    input: &[i64],
    policy: PivotPolicy,
    iterations: usize,
    rng: &mut R,
) -> Duration {
    let iterations = iterations.max(1);
    let mut total = Duration::ZERO;

    for _ in 0..iterations {
        let start = Instant::now();
        let sorted = sort_with(input, policy, rng);
        total += start.elapsed();
        std::hint::black_box(sorted);
    }

    total / iterations as u32
}

/// One measured point: input size and averaged sort time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingPoint {
    /// Input length.
    pub size: usize,
    /// Mean elapsed time over the measured repetitions.
    pub avg: Duration,
}

/// Averaged timings of one pivot policy across input sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySeries {
    /// The measured pivot policy.
    pub policy: PivotPolicy,
    /// Points in the order the sizes were requested.
    pub points: Vec<TimingPoint>,
}

/// Side-by-side timing series for the two pivot policies.
///
/// Both series are measured over the same generated input per size, so
/// the comparison isolates pivot selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Repetitions averaged into each point.
    pub iterations: usize,
    /// Series for [`PivotPolicy::Last`].
    pub last_pivot: PolicySeries,
    /// Series for [`PivotPolicy::Random`].
    pub random_pivot: PolicySeries,
}

/// Measures both pivot policies across the given input sizes.
///
/// For each size, one random input is generated and both policies are
/// timed against copies of it with [`time_sort`].
pub fn compare_policies<R: Rng>(
    sizes: &[usize],
    iterations: usize,
    rng: &mut R,
) -> ComparisonReport {
    let mut last_points = Vec::with_capacity(sizes.len());
    let mut random_points = Vec::with_capacity(sizes.len());

    for &size in sizes {
        let input = random_sequence(size, rng);

        let avg = time_sort(&input, PivotPolicy::Last, iterations, rng);
        last_points.push(TimingPoint { size, avg });

        let avg = time_sort(&input, PivotPolicy::Random, iterations, rng);
        random_points.push(TimingPoint { size, avg });
    }

    ComparisonReport {
        iterations: iterations.max(1),
        last_pivot: PolicySeries {
            policy: PivotPolicy::Last,
            points: last_points,
        },
        random_pivot: PolicySeries {
            policy: PivotPolicy::Random,
            points: random_points,
        },
    }
}
