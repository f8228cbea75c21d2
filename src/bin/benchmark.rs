//! Serial vs. parallel evolution timings

use std::time::Instant;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use torus_life::{Grid, RuleSet, engine};

fn random_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size);
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), 0.3);
    grid
}

/// Average milliseconds per generation
fn benchmark(size: usize, iterations: u32, evolve: fn(&Grid, &RuleSet) -> Grid) -> f64 {
    let rules = RuleSet::default();
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = evolve(&grid, &rules);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sizes = [30, 100, 250, 500, 1000, 2000];
    let iterations = 20;
    info!("Benchmarking {} sizes, {iterations} generations each", sizes.len());

    println!("=== Evolution Benchmark (B3/S23, toroidal) ===\n");
    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, engine::step);
        let parallel_ms = benchmark(size, iterations, engine::step_parallel);

        println!(
            "{:>10} {:>10.3}ms {:>10.3}ms {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 1000;
    let cells = (size * size) as f64;
    let ms = benchmark(size, iterations, engine::evolve);
    println!(
        "\nevolve() at {size}x{size}: {ms:.2} ms/gen, {:.1}M cells/sec",
        cells / (ms / 1000.0) / 1_000_000.0
    );
}
