use clap::Parser;

/// Memory read bandwidth benchmark: fill a buffer, sum it across N threads,
/// report GB/s.
#[derive(Parser, Debug)]
#[command(name = "membw", version, about)]
pub struct MembwArgs {
    /// Number of worker threads (must be >= 1)
    #[arg(value_name = "NUM_THREADS")]
    pub num_threads: u32,

    /// Buffer size in bytes (e.g. 1000000000, 512M, 1G)
    #[arg(value_name = "SIZE_BYTES")]
    pub size_bytes: String,

    /// Skip the checksum assertion and report raw throughput only
    #[arg(long)]
    pub skip_verify: bool,

    /// Print setup details to stderr before measuring
    #[arg(short, long)]
    pub verbose: bool,
}
