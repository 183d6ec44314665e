//! Worker threads and the timed parallel-sum phase.
//!
//! Exactly one OS thread per partition range, spawned once and joined once.
//! Each worker reads only its own disjoint slice of the buffer and its sole
//! output is the return value of its closure, so the hot loop performs no
//! shared writes and needs no locks. The scoped join establishes the
//! happens-before edge between a worker finishing and the coordinator
//! reading its sum.

use std::thread;

use crate::buffer::Buffer;
use crate::error::BenchError;
use crate::partition::partition;
use crate::timing::BenchTimer;

/// Result of one timed parallel-sum phase.
pub struct RunOutcome {
    /// Wrapping sum of all per-worker local sums.
    pub total: u64,
    /// Nanoseconds spent in the parallel phase (partition through last join).
    pub elapsed_ns: u64,
}

/// Wrapping sum of one worker's slice. This is the measured hot loop.
pub fn sum_range(elems: &[u64]) -> u64 {
    elems.iter().fold(0u64, |acc, &v| acc.wrapping_add(v))
}

/// Run the timed parallel phase: partition, spawn, join, aggregate.
///
/// The timer starts before partitioning and stops immediately after the last
/// join; aggregation of the local sums happens outside the timed window.
/// Spawn failure and worker panic are both fatal to the run.
pub fn run_workers(buffer: &Buffer, num_threads: u32) -> Result<RunOutcome, BenchError> {
    let elems = buffer.as_slice();

    let timer = BenchTimer::start();
    let ranges = partition(elems.len(), num_threads as usize);

    let local_sums = thread::scope(|scope| -> Result<Vec<u64>, BenchError> {
        let mut handles = Vec::with_capacity(ranges.len());
        for (index, range) in ranges.iter().enumerate() {
            let slice = &elems[range.clone()];
            let handle = thread::Builder::new()
                .name(format!("membw-worker-{index}"))
                .spawn_scoped(scope, move || sum_range(slice))
                .map_err(BenchError::ThreadSpawn)?;
            handles.push(handle);
        }

        // Join every handle before inspecting results, so a panicked worker
        // surfaces as ThreadJoin instead of re-panicking at scope exit.
        let joined: Vec<_> = handles.into_iter().map(|h| h.join()).collect();
        joined
            .into_iter()
            .map(|r| r.map_err(|_| BenchError::ThreadJoin))
            .collect()
    })?;
    let elapsed_ns = timer.elapsed_ns();

    let total = local_sums
        .into_iter()
        .fold(0u64, |acc, s| acc.wrapping_add(s));

    Ok(RunOutcome { total, elapsed_ns })
}
