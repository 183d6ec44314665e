//! Index-range partitioning across workers.

use std::ops::Range;

/// Split `[0, length)` into `worker_count` contiguous, disjoint,
/// near-equal ranges.
///
/// Worker `i` gets `floor(i * length / worker_count) ..
/// floor((i + 1) * length / worker_count)`, which spreads the remainder
/// across workers so share sizes differ by at most one element. The union of
/// all ranges is exactly `[0, length)`, even when `worker_count > length`
/// (some shares are then empty).
///
/// `worker_count` must be at least 1; the CLI layer rejects zero before this
/// is reachable.
pub fn partition(length: usize, worker_count: usize) -> Vec<Range<usize>> {
    assert!(worker_count > 0, "worker_count must be >= 1");
    (0..worker_count)
        .map(|i| {
            // u128 keeps i * length exact for any addressable length
            let start = (i as u128 * length as u128 / worker_count as u128) as usize;
            let end = ((i as u128 + 1) * length as u128 / worker_count as u128) as usize;
            start..end
        })
        .collect()
}
