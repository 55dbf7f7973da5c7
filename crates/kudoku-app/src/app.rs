//! The interactive menu loop.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use kudoku_game::Game;
use kudoku_generator::PuzzleGenerator;

use crate::{persist, render::render_board};

/// The interactive application: a game session driven by a line-based menu.
///
/// Input and output are injected so the whole loop can be exercised by tests
/// with scripted sessions; the binary wires up locked stdin/stdout.
pub struct App<R, W> {
    input: R,
    output: W,
    puzzle_path: PathBuf,
    solution_path: PathBuf,
    game: Game,
    generator: PuzzleGenerator,
}

impl<R, W> App<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates an application over the given I/O endpoints and board files.
    pub fn new(input: R, output: W, puzzle_path: PathBuf, solution_path: PathBuf) -> Self {
        Self {
            input,
            output,
            puzzle_path,
            solution_path,
            game: Game::new(),
            generator: PuzzleGenerator::new(),
        }
    }

    /// Runs the menu loop until the user quits or input ends.
    ///
    /// File problems are reported and end the session (when the puzzle file
    /// is unusable) or are retried through the menu (when a solution file
    /// fails to load); they are never fatal errors.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n   -- Menu --")?;
            writeln!(self.output, "1. Load a sudoku puzzle from file")?;
            writeln!(self.output, "2. Generate a new sudoku puzzle")?;
            write!(self.output, "Choose an option: ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => {
                    if !self.load_puzzle()? {
                        return Ok(());
                    }
                }
                "2" => {
                    if !self.generate_puzzle()? {
                        return Ok(());
                    }
                }
                _ => {
                    writeln!(self.output, "Unknown option. Try again.")?;
                    continue;
                }
            }

            if !self.solve_menu()? {
                return Ok(());
            }

            write!(self.output, "Another game? (y/n): ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {}
                _ => return Ok(()),
            }
        }
    }

    /// Loads the puzzle file into the session. False ends the session.
    fn load_puzzle(&mut self) -> io::Result<bool> {
        if let Err(err) = persist::load_board_from_path(self.game.board_mut(), &self.puzzle_path)
        {
            log::error!("cannot load puzzle from {}: {err}", self.puzzle_path.display());
            writeln!(
                self.output,
                "ERROR: cannot read puzzle file {}",
                self.puzzle_path.display()
            )?;
            return Ok(false);
        }
        if self.game.is_solved() {
            writeln!(
                self.output,
                "You loaded an already solved board, not a puzzle."
            )?;
        }
        writeln!(self.output, "{}", render_board(self.game.board()))?;
        Ok(true)
    }

    /// Generates a fresh puzzle and saves it. False ends the session.
    fn generate_puzzle(&mut self) -> io::Result<bool> {
        self.game.generate(&mut self.generator);
        log::info!(
            "generated a puzzle with {} givens",
            self.game.board().filled_count()
        );
        writeln!(self.output, "{}", render_board(self.game.board()))?;

        if let Err(err) = persist::save_board_to_path(self.game.board(), &self.puzzle_path) {
            log::error!("cannot save puzzle to {}: {err}", self.puzzle_path.display());
            writeln!(
                self.output,
                "ERROR: cannot write puzzle file {}",
                self.puzzle_path.display()
            )?;
            return Ok(false);
        }
        Ok(true)
    }

    /// The solve sub-menu. False quits the whole application.
    fn solve_menu(&mut self) -> io::Result<bool> {
        loop {
            writeln!(self.output, "\n -- Solve the puzzle --")?;
            writeln!(self.output, "1. Load a solved board from file")?;
            writeln!(self.output, "2. Solve it for me")?;
            writeln!(self.output, "3. Quit")?;
            write!(self.output, "Choose an option: ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                return Ok(false);
            };
            match choice.as_str() {
                "1" => {
                    if self.check_loaded_solution()? {
                        return Ok(true);
                    }
                    // Solved incorrectly: offer a retry.
                    write!(self.output, "Try again? (y/n): ")?;
                    self.output.flush()?;
                    match self.read_line()? {
                        Some(answer) if answer.eq_ignore_ascii_case("y") => {}
                        _ => return Ok(true),
                    }
                }
                "2" => {
                    self.auto_solve()?;
                    return Ok(true);
                }
                "3" => return Ok(false),
                _ => writeln!(self.output, "Unknown option. Try again.")?,
            }
        }
    }

    /// Loads a candidate solution and scores it. True means solved.
    fn check_loaded_solution(&mut self) -> io::Result<bool> {
        if let Err(err) =
            persist::load_board_from_path(self.game.board_mut(), &self.solution_path)
        {
            log::warn!(
                "cannot load solution from {}: {err}",
                self.solution_path.display()
            );
            writeln!(
                self.output,
                "ERROR: cannot read solution file {}",
                self.solution_path.display()
            )?;
            return Ok(true);
        }

        let valid = self.game.check_validity();
        writeln!(self.output, "{}", self.game.stats())?;
        if valid {
            writeln!(self.output, "YOU SOLVED THE SUDOKU PUZZLE!")?;
        } else {
            writeln!(self.output, "The puzzle was not solved correctly.")?;
        }
        Ok(valid)
    }

    /// Solves the current board, scores it, and saves the result.
    fn auto_solve(&mut self) -> io::Result<()> {
        if !self.game.solve() {
            writeln!(self.output, "This puzzle has no solution.")?;
            return Ok(());
        }
        writeln!(self.output, "Solved sudoku puzzle:")?;
        writeln!(self.output, "{}", render_board(self.game.board()))?;

        self.game.check_validity();
        writeln!(self.output, "{}", self.game.stats())?;

        if let Err(err) = persist::save_board_to_path(self.game.board(), &self.solution_path) {
            log::error!(
                "cannot save solution to {}: {err}",
                self.solution_path.display()
            );
            writeln!(
                self.output,
                "ERROR: cannot write solution file {}",
                self.solution_path.display()
            )?;
        }
        Ok(())
    }

    /// Reads the next input line, trimmed; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
