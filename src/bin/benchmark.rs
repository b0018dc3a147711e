//! Timing comparison of the serial and row-parallel advance paths

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use torus_life::Simulation;

fn benchmark_advance(size: usize, iterations: u32, parallel: bool) -> f64 {
    let mut sim = Simulation::new(size, size).expect("positive size");
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    sim.grid_mut().randomize(&mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        if parallel {
            sim.advance_parallel();
        } else {
            sim.advance();
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Toroidal Life Advance Benchmark ===\n");

    let sizes = [50, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for size in sizes {
        let serial_ms = benchmark_advance(size, iterations, false);
        let parallel_ms = benchmark_advance(size, iterations, true);

        println!(
            "{:>12} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\nTimes are ms per generation.");
}
