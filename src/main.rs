//! Benchmark runner comparing the three multipliers.
//!
//! Sweeps power-of-two sizes from the base-case threshold up to a
//! configurable maximum, times each algorithm on the same seeded random
//! inputs, and verifies that all results agree.
//!
//! Usage: `blockmul [max_size] [seed]` (defaults: 1024, 42)

use std::env;
use std::process;
use std::time::Instant;

use blockmul::{Algorithm, DEFAULT_THRESHOLD, Matrix, equal, multiply};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Sizes above this skip the cubic direct baseline; a single direct run at
/// 4096 takes minutes and the recursive pair still cross-check each other.
const DIRECT_SIZE_CAP: usize = 2048;

struct SizeResult {
    size: usize,
    direct_ms: Option<f64>,
    block_ms: f64,
    strassen_ms: f64,
    agree: bool,
}

fn main() {
    let (max_size, seed) = parse_args();
    if let Err(e) = run(max_size, seed) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(max_size: usize, seed: u64) -> blockmul::Result<()> {
    println!("=== Square Matrix Multiplication Benchmark ===\n");
    println!(
        "Sizes: powers of two from {} to {}, seed {}\n",
        DEFAULT_THRESHOLD, max_size, seed
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut all_results = Vec::new();

    let mut size = DEFAULT_THRESHOLD;
    while size <= max_size {
        println!("Matrix: {}x{}", size, size);
        println!("{}", "-".repeat(50));

        let a = Matrix::random(size, &mut rng);
        let b = Matrix::random(size, &mut rng);

        let (block_ms, c_block) = bench(&a, &b, Algorithm::BlockRecursive)?;
        println!("  block      {:>10.2} ms", block_ms);

        let (strassen_ms, c_strassen) = bench(&a, &b, Algorithm::Strassen)?;
        println!("  strassen   {:>10.2} ms", strassen_ms);

        let mut agree = equal(&c_block, &c_strassen)?;
        let direct_ms = if size <= DIRECT_SIZE_CAP {
            let (ms, c_direct) = bench(&a, &b, Algorithm::Direct)?;
            println!("  direct     {:>10.2} ms", ms);
            agree = agree && equal(&c_direct, &c_block)?;
            Some(ms)
        } else {
            println!("  direct     skipped (> {})", DIRECT_SIZE_CAP);
            None
        };

        println!("  agreement: {}\n", if agree { "ok" } else { "MISMATCH" });

        all_results.push(SizeResult {
            size,
            direct_ms,
            block_ms,
            strassen_ms,
            agree,
        });
        size *= 2;
    }

    print_summary_table(&all_results);
    Ok(())
}

fn bench(a: &Matrix, b: &Matrix, algorithm: Algorithm) -> blockmul::Result<(f64, Matrix)> {
    let start = Instant::now();
    let c = multiply(a, b, algorithm)?;
    Ok((start.elapsed().as_secs_f64() * 1000.0, c))
}

fn parse_args() -> (usize, u64) {
    let mut args = env::args().skip(1);
    let max_size = args
        .next()
        .map(|s| {
            s.parse().unwrap_or_else(|_| {
                eprintln!("error: max_size must be an integer, got '{}'", s);
                process::exit(2);
            })
        })
        .unwrap_or(1024);
    let seed = args
        .next()
        .map(|s| {
            s.parse().unwrap_or_else(|_| {
                eprintln!("error: seed must be an integer, got '{}'", s);
                process::exit(2);
            })
        })
        .unwrap_or(42);
    (max_size, seed)
}

fn print_summary_table(all_results: &[SizeResult]) {
    println!("{}", "=".repeat(64));
    println!("SUMMARY");
    println!("{}", "=".repeat(64));

    println!(
        "{:>6} {:>12} {:>12} {:>12} {:>10}",
        "Size", "Direct", "Block", "Strassen", "Agree"
    );
    println!("{}", "-".repeat(64));

    for r in all_results {
        let direct = match r.direct_ms {
            Some(ms) => format!("{:.2} ms", ms),
            None => "-".to_string(),
        };
        println!(
            "{:>6} {:>12} {:>9.2} ms {:>9.2} ms {:>10}",
            r.size,
            direct,
            r.block_ms,
            r.strassen_ms,
            if r.agree { "yes" } else { "NO" }
        );
    }
    println!("{}", "=".repeat(64));
}
