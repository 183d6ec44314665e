//! Full-pipeline integration tests: allocate, fill, partition, sum, verify.

use membw::harness::{run, BenchConfig};
use membw::partition::partition;
use membw::Buffer;

#[test]
fn test_80_bytes_across_4_threads() {
    // 80 bytes -> 10 u64 elements; floor partition gives shares of 2,3,2,3
    let ranges = partition(10, 4);
    assert_eq!(ranges, vec![0..2, 2..5, 5..7, 7..10]);

    let config = BenchConfig {
        num_threads: 4,
        size_bytes: 80,
        verify: true,
    };
    let m = run(&config).expect("verified 80-byte run");
    assert_eq!(m.size_bytes, 80);

    // The aggregate must equal an independent fill of the same length
    let mut reference = Buffer::allocate(80).expect("allocate reference buffer");
    assert_eq!(m.total, reference.fill());
}

#[test]
fn test_size_rounds_up_to_whole_elements() {
    let buf = Buffer::allocate(81).unwrap();
    assert_eq!(buf.len(), 11);
}

#[test]
fn test_verified_and_unverified_agree() {
    let verified = run(&BenchConfig {
        num_threads: 2,
        size_bytes: 8192,
        verify: true,
    })
    .unwrap();
    let raw = run(&BenchConfig {
        num_threads: 2,
        size_bytes: 8192,
        verify: false,
    })
    .unwrap();
    assert_eq!(verified.total, raw.total);
}

#[test]
fn test_total_independent_of_thread_count() {
    let totals: Vec<u64> = [1u32, 2, 5, 8]
        .iter()
        .map(|&n| {
            run(&BenchConfig {
                num_threads: n,
                size_bytes: 100_000,
                verify: true,
            })
            .expect("run")
            .total
        })
        .collect();
    assert!(
        totals.windows(2).all(|w| w[0] == w[1]),
        "totals varied with thread count: {totals:?}"
    );
}

#[test]
fn test_throughput_line_shape() {
    let m = run(&BenchConfig {
        num_threads: 4,
        size_bytes: 1_000_000,
        verify: true,
    })
    .unwrap();
    let line = m.throughput_line();
    assert!(line.ends_with(" GB/s"), "unexpected line: {line}");
    let number = line.trim_end_matches(" GB/s");
    assert!(
        number.parse::<f64>().is_ok(),
        "bandwidth should be numeric: {line}"
    );
    let decimals = number.split('.').nth(1).map(str::len);
    assert_eq!(decimals, Some(3), "expected 3 decimal places: {line}");
}
