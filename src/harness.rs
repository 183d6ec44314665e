//! Coordinator: allocate, fill, measure, verify, report.

use crate::buffer::Buffer;
use crate::error::BenchError;
use crate::workers::run_workers;

/// Configuration for one benchmark run.
pub struct BenchConfig {
    /// Worker thread count (>= 1, enforced by the CLI layer).
    pub num_threads: u32,
    /// Requested buffer size in bytes.
    pub size_bytes: u64,
    /// Whether to assert the aggregate against the fill-time checksum.
    /// Disabled, the run reports raw throughput with no correctness check.
    pub verify: bool,
}

/// One completed measurement.
pub struct Measurement {
    /// Requested byte size; the bandwidth numerator.
    pub size_bytes: u64,
    /// Nanoseconds spent in the parallel phase.
    pub elapsed_ns: u64,
    /// Aggregated wrapping sum over the whole buffer.
    pub total: u64,
}

impl Measurement {
    /// Bandwidth in GB/s. Bytes per nanosecond is numerically GB/s
    /// (1e9 ns/s against 1e9 bytes/GB cancels).
    pub fn gb_per_sec(&self) -> f64 {
        if self.elapsed_ns == 0 {
            return 0.0;
        }
        self.size_bytes as f64 / self.elapsed_ns as f64
    }

    /// The single stdout result line.
    pub fn throughput_line(&self) -> String {
        format!("{:.3} GB/s", self.gb_per_sec())
    }
}

/// Execute one full benchmark run.
///
/// The fill (and its checksum) always happens before the timed window; the
/// window brackets exactly the parallel read phase. With `verify` set, a
/// checksum mismatch is fatal: it means the partitioning or summation is
/// broken and the measured number must not be reported.
pub fn run(config: &BenchConfig) -> Result<Measurement, BenchError> {
    let mut buffer = Buffer::allocate(config.size_bytes)?;
    let expected = buffer.fill();

    let outcome = run_workers(&buffer, config.num_threads)?;

    if config.verify && outcome.total != expected {
        return Err(BenchError::ChecksumMismatch {
            expected,
            actual: outcome.total,
        });
    }

    Ok(Measurement {
        size_bytes: config.size_bytes,
        elapsed_ns: outcome.elapsed_ns,
        total: outcome.total,
    })
}
