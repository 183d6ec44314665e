pub mod buffer;
pub mod cli;
pub mod config;
pub mod error;
pub mod harness;
pub mod partition;
pub mod timing;
pub mod workers;

pub use buffer::Buffer;
pub use error::BenchError;
pub use harness::{run, BenchConfig, Measurement};
pub use partition::partition;
pub use timing::BenchTimer;
pub use workers::{run_workers, RunOutcome};
