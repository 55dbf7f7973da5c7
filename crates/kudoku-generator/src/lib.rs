//! Randomized sudoku puzzle generation.
//!
//! [`PuzzleGenerator`] builds a fully solved random board by constrained
//! backtracking (shuffled digit order at every cell), then carves a puzzle
//! out of it: a blind random removal pass clears roughly 70% of the cells,
//! and a per-block thinning pass brings every 3×3 block down to at most
//! [`MAX_FILLED_PER_BLOCK`](kudoku_core::rules::MAX_FILLED_PER_BLOCK) filled
//! cells.
//!
//! The generator owns its random source (a [`Pcg64Mcg`]) instead of touching
//! any process-global state, so output is reproducible under
//! [`PuzzleGenerator::from_seed`] and fresh per instance otherwise.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::rules;
//! use kudoku_generator::PuzzleGenerator;
//!
//! let mut generator = PuzzleGenerator::from_seed(42);
//! let puzzle = generator.generate();
//! assert!(rules::is_valid_puzzle(&puzzle));
//! ```

use kudoku_core::{Board, Digit, GRID_SIZE, Position, rules};
use rand::{RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

/// Fraction of the 81 cells targeted by the blind removal pass.
const REMOVAL_RATE: f64 = 0.7;

/// A puzzle generator with its own seedable random source.
///
/// Each call to [`generate`](Self::generate) produces a fresh random puzzle;
/// successive calls on one instance continue the same random stream.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    rng: Pcg64Mcg,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator seeded from the thread-local entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a generator with a fixed seed, for reproducible output.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Generates a new puzzle.
    ///
    /// The returned board is a structurally valid puzzle: the remaining
    /// digits are mutually consistent (they come from a complete solved
    /// grid) and no block holds more than
    /// [`MAX_FILLED_PER_BLOCK`](rules::MAX_FILLED_PER_BLOCK) filled cells.
    /// Every generated puzzle is solvable, though not necessarily uniquely.
    #[must_use]
    pub fn generate(&mut self) -> Board {
        let mut board = Board::new();
        let filled = self.fill_from(&mut board, 0);
        debug_assert!(filled, "an empty 9x9 grid always admits a full fill");
        self.remove_random_cells(&mut board);
        self.thin_dense_blocks(&mut board);
        board
    }

    /// Fills the board from the `cursor`-th cell (row-major) onward.
    ///
    /// Tries the digits in a fresh random order at each cell and backtracks
    /// on dead ends. Always succeeds when called on an empty board, but the
    /// backtracking still guards the recursion.
    fn fill_from(&mut self, board: &mut Board, cursor: usize) -> bool {
        let Some(&pos) = Position::ALL.get(cursor) else {
            // Cursor ran past the last cell: the board is complete.
            return true;
        };

        let mut digits = Digit::ALL;
        digits.shuffle(&mut self.rng);
        for digit in digits {
            if rules::placement_allowed(board, pos, digit) {
                board.place(pos, digit);
                if self.fill_from(board, cursor + 1) {
                    return true;
                }
                board.clear(pos);
            }
        }

        false
    }

    /// Clears `floor(0.7 × 81) = 56` uniformly random cells.
    ///
    /// Targets are not deduplicated: hitting the same cell twice, or a cell
    /// that is already empty, simply wastes the draw, so fewer than 56
    /// distinct cells may end up cleared. This mirrors the legacy removal
    /// behavior and is accepted, not corrected.
    fn remove_random_cells(&mut self, board: &mut Board) {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            clippy::cast_sign_loss
        )]
        let to_remove = (REMOVAL_RATE * (GRID_SIZE * GRID_SIZE) as f64) as usize;
        for _ in 0..to_remove {
            let cell = self.rng.random_range(0..Position::ALL.len());
            board.clear(Position::ALL[cell]);
        }
    }

    /// Clears random cells inside any block holding more than
    /// [`MAX_FILLED_PER_BLOCK`](rules::MAX_FILLED_PER_BLOCK) filled cells.
    ///
    /// The filled count is snapshotted once per block and decremented as
    /// cells are cleared; each clearing strictly reduces it, so the loop
    /// terminates.
    fn thin_dense_blocks(&mut self, board: &mut Board) {
        for block in 0..9 {
            let cells = Position::block_positions(block);
            let mut filled = board.block_filled_count(block);
            while filled > rules::MAX_FILLED_PER_BLOCK {
                let pos = cells[self.rng.random_range(0..cells.len())];
                if board.get(pos).is_some() {
                    board.clear(pos);
                    filled -= 1;
                }
            }
        }
    }
}
