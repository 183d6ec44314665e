//! Wall-clock timing for the measured region.

use std::time::Instant;

/// Monotonic wall-clock timer bracketing the parallel work phase.
///
/// `Instant` is monotonic and immune to system clock adjustment, and cannot
/// fail on supported platforms, so there is no error path here.
pub struct BenchTimer {
    start: Instant,
}

impl BenchTimer {
    /// Start the timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Nanoseconds elapsed since `start()`.
    pub fn elapsed_ns(&self) -> u64 {
        self.start.elapsed().as_nanos() as u64
    }
}
