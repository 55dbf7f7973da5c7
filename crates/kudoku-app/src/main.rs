//! Interactive console sudoku.
//!
//! Generates or loads 9x9 puzzles, lets the player submit a solved board
//! from a file or asks the solver to finish it, and reports placement
//! statistics. Boards are stored in a fixed text format, see [`persist`].

use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser as _;

use self::app::App;

mod app;
mod persist;
mod render;

/// Command line arguments.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
struct Args {
    /// File the puzzle is loaded from and saved to.
    #[arg(default_value = "sudoku.txt")]
    puzzle_file: PathBuf,
    /// File the solved board is loaded from and saved to.
    #[arg(default_value = "solution.txt")]
    solution_file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut app = App::new(stdin, stdout, args.puzzle_file, args.solution_file);
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("terminal i/o failed: {err}");
            ExitCode::FAILURE
        }
    }
}
