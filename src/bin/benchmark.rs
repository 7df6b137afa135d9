//! Serial vs parallel generation timing on square random grids

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use torus_life::Grid;

fn random_grid(size: usize) -> Grid {
    Grid::random(size, size, 0.2, &mut StdRng::seed_from_u64(size as u64))
}

fn benchmark(size: usize, iterations: u32, evolve: fn(&Grid) -> Grid) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = evolve(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Generation Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10} {:>14}", "Size", "Serial", "Parallel", "Speedup", "Cells/sec");
    println!("{:-<62}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, Grid::next_generation);
        let parallel_ms = benchmark(size, iterations, Grid::next_generation_parallel);
        let cells_per_sec = (size * size) as f64 / (parallel_ms / 1000.0);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x {:>13.1}M",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            cells_per_sec / 1_000_000.0
        );
    }

    // Same seed, same generations: both paths must agree
    let grid = random_grid(300);
    assert_eq!(grid.next_generation(), grid.next_generation_parallel());
}
