use clap::Parser;

use membw::buffer::element_count;
use membw::cli::MembwArgs;
use membw::config::{parse_size, validate};
use membw::harness::{run, BenchConfig};

fn main() {
    let args = match MembwArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // clap renders its own usage/error text; help and version exit 0,
            // real argument errors exit 1
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let size_bytes = match parse_size(&args.size_bytes) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing size: {}", e);
            eprintln!("Usage: membw <num_threads> <size_bytes>");
            std::process::exit(1);
        }
    };

    if let Err(e) = validate(args.num_threads, size_bytes) {
        eprintln!("{}", e);
        eprintln!("Usage: membw <num_threads> <size_bytes>");
        std::process::exit(1);
    }

    if args.verbose {
        let parallelism = std::thread::available_parallelism()
            .map(usize::from)
            .unwrap_or(1);
        eprintln!("membw: memory read bandwidth benchmark");
        eprintln!(
            "  Threads: {} (hardware parallelism: {})",
            args.num_threads, parallelism
        );
        eprintln!(
            "  Buffer: {} bytes ({} x u64)",
            size_bytes,
            element_count(size_bytes)
        );
        eprintln!("  Verify: {}", !args.skip_verify);
    }

    let config = BenchConfig {
        num_threads: args.num_threads,
        size_bytes,
        verify: !args.skip_verify,
    };

    match run(&config) {
        Ok(m) => println!("{}", m.throughput_line()),
        Err(e) => {
            eprintln!("membw: {}", e);
            std::process::exit(1);
        }
    }
}
