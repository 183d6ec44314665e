//! Central error type for the benchmark.
//!
//! Every failure mode is fatal by design: the process reports a diagnostic
//! and exits. There is no retry or fallback anywhere in the pipeline.
//!
//! | Error            | Source                          | Handling                 |
//! |------------------|---------------------------------|--------------------------|
//! | OutOfMemory      | buffer allocation               | diagnostic, exit nonzero |
//! | ThreadSpawn      | OS refused a worker thread      | diagnostic, exit nonzero |
//! | ThreadJoin       | worker panicked before joining  | diagnostic, exit nonzero |
//! | ChecksumMismatch | aggregate != fill-time checksum | diagnostic, exit nonzero |
//!
//! Usage errors (bad CLI arguments) never reach this type; they are handled
//! at the CLI layer with a usage message.

use std::fmt;
use std::io;

/// Fatal benchmark failures.
#[derive(Debug)]
pub enum BenchError {
    /// Buffer allocation failed -- not enough memory for the requested size.
    OutOfMemory { bytes: u64 },

    /// The OS refused to create a worker thread.
    ThreadSpawn(io::Error),

    /// A worker thread panicked before delivering its local sum.
    ThreadJoin,

    /// The aggregated worker sum disagrees with the fill-time checksum.
    /// This means the partitioning or summation itself is broken, so the
    /// measured number must not be reported.
    ChecksumMismatch { expected: u64, actual: u64 },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::OutOfMemory { bytes } => {
                write!(f, "failed to allocate {} byte buffer", bytes)
            }
            BenchError::ThreadSpawn(e) => {
                write!(f, "failed to spawn worker thread: {}", e)
            }
            BenchError::ThreadJoin => {
                write!(f, "worker thread panicked before completion")
            }
            BenchError::ChecksumMismatch { expected, actual } => {
                write!(
                    f,
                    "checksum mismatch: workers summed {} but fill computed {}",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}
