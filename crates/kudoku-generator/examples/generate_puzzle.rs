//! Example demonstrating puzzle generation.
//!
//! Generates one or more puzzles and prints them in the compact grid
//! notation, optionally together with a backtracking solution.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproducible output with a fixed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```
//!
//! Several puzzles at once, each with a solution:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 3 --solve
//! ```

use clap::Parser;
use kudoku_generator::PuzzleGenerator;
use kudoku_solver::solve;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for reproducible generation; omit for a random seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Also print a solution for each puzzle.
    #[arg(long)]
    solve: bool,
}

fn main() {
    let args = Args::parse();
    let mut generator = match args.seed {
        Some(seed) => PuzzleGenerator::from_seed(seed),
        None => PuzzleGenerator::new(),
    };

    for i in 0..args.count {
        let puzzle = generator.generate();
        println!("Puzzle {} ({} givens):", i + 1, puzzle.filled_count());
        println!("{puzzle}");
        println!();

        if args.solve {
            let mut solution = puzzle.clone();
            assert!(solve(&mut solution), "generated puzzles are solvable");
            println!("Solution:");
            println!("{solution}");
            println!();
        }
    }
}
