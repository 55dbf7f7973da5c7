//! The game session.

use kudoku_core::{Board, Position, rules};
use kudoku_generator::PuzzleGenerator;

use crate::PlacementStats;

/// A sudoku game session: a board plus its placement statistics.
///
/// The session ties together the pieces of the workspace: puzzles come from
/// a [`PuzzleGenerator`], the board can be handed to the backtracking solver,
/// and a completed board is scored by [`check_validity`](Self::check_validity),
/// which updates the [`PlacementStats`] counters.
///
/// # Examples
///
/// ```
/// use kudoku_game::Game;
/// use kudoku_generator::PuzzleGenerator;
///
/// let mut game = Game::new();
/// game.generate(&mut PuzzleGenerator::from_seed(42));
/// assert!(!game.is_solved());
///
/// assert!(game.solve());
/// assert!(game.check_validity());
/// assert_eq!(game.stats().correct_placements(), 81);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    board: Board,
    stats: PlacementStats,
}

impl Game {
    /// Creates a session with an empty board and zeroed statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over an initial board, with zeroed statistics.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            stats: PlacementStats::default(),
        }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current board for mutation (e.g. loading from a file).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replaces the whole board, leaving the statistics untouched.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Returns the placement statistics of the last validity pass.
    #[must_use]
    pub fn stats(&self) -> PlacementStats {
        self.stats
    }

    /// Replaces the board with a freshly generated puzzle.
    ///
    /// The per-pass placement counters are reset; the game counter keeps
    /// counting across puzzles.
    pub fn generate(&mut self, generator: &mut PuzzleGenerator) {
        self.stats.reset_placements();
        self.board = generator.generate();
    }

    /// Returns whether every cell of the board is filled.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        rules::is_fully_placed(&self.board)
    }

    /// Runs the backtracking solver on the board in place.
    ///
    /// Returns false when the board is unsolvable; given cells are preserved
    /// either way.
    pub fn solve(&mut self) -> bool {
        kudoku_solver::solve(&mut self.board)
    }

    /// Checks a completed board and updates the statistics.
    ///
    /// If the board is not fully placed, returns false immediately without
    /// touching any counter. Otherwise the placement counters are reset and
    /// every cell is tallied as correct (no conflict in its row, column, or
    /// block) or incorrect; the game counter is incremented once per pass
    /// regardless of the verdict. Returns true iff no cell was tallied
    /// incorrect.
    pub fn check_validity(&mut self) -> bool {
        if !rules::is_fully_placed(&self.board) {
            return false;
        }

        self.stats.reset_placements();
        for pos in Position::ALL {
            if rules::conflict_count(&self.board, pos) > 0 {
                self.stats.record_incorrect();
            } else {
                self.stats.record_correct();
            }
        }
        self.stats.record_game_checked();

        self.stats.incorrect_placements() == 0
    }
}

#[cfg(test)]
mod tests {
    use kudoku_core::Digit;
    use kudoku_core::rules::is_valid_puzzle;

    use super::*;

    const SOLVED: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_check_validity_on_correct_solution() {
        let mut game = Game::from_board(board(SOLVED));
        assert!(game.check_validity());
        assert_eq!(game.stats().correct_placements(), 81);
        assert_eq!(game.stats().incorrect_placements(), 0);
        assert_eq!(game.stats().games_checked(), 1);
    }

    #[test]
    fn test_check_validity_requires_full_board() {
        let mut game = Game::from_board(board(SOLVED));
        game.board_mut().clear(Position::new(8, 8));

        assert!(!game.check_validity());
        // Early return leaves every counter untouched.
        assert_eq!(game.stats(), PlacementStats::default());
    }

    #[test]
    fn test_check_validity_flags_row_duplicate() {
        // The last row of the canonical solution with its 4 replaced by a
        // second 1.
        let mut game = Game::from_board(board(
            "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            315 286 179
            ",
        ));
        assert!(!game.check_validity());

        let stats = game.stats();
        assert!(stats.incorrect_placements() > 0);
        assert_eq!(stats.correct_placements() + stats.incorrect_placements(), 81);
        assert_eq!(stats.games_checked(), 1);
    }

    #[test]
    fn test_counters_reset_between_passes() {
        let mut game = Game::from_board(board(SOLVED));
        assert!(game.check_validity());
        assert!(game.check_validity());
        // Counters describe the latest pass only; the game counter keeps
        // counting.
        assert_eq!(game.stats().correct_placements(), 81);
        assert_eq!(game.stats().incorrect_placements(), 0);
        assert_eq!(game.stats().games_checked(), 2);
    }

    #[test]
    fn test_generate_installs_a_valid_puzzle() {
        let mut game = Game::from_board(board(SOLVED));
        assert!(game.check_validity());

        let mut generator = PuzzleGenerator::from_seed(5);
        game.generate(&mut generator);
        assert!(is_valid_puzzle(game.board()));
        assert!(!game.is_solved());
        // Placement counters are reset, the game counter survives.
        assert_eq!(game.stats().correct_placements(), 0);
        assert_eq!(game.stats().games_checked(), 1);
    }

    #[test]
    fn test_solve_then_check_round_trip() {
        let mut game = Game::new();
        game.generate(&mut PuzzleGenerator::from_seed(11));
        assert!(game.solve());
        assert!(game.is_solved());
        assert!(game.check_validity());
        assert_eq!(game.stats().incorrect_placements(), 0);
    }

    #[test]
    fn test_set_board_keeps_statistics() {
        let mut game = Game::from_board(board(SOLVED));
        assert!(game.check_validity());

        game.set_board(Board::new());
        assert_eq!(game.stats().games_checked(), 1);
        assert_eq!(game.stats().correct_placements(), 81);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_solve_preserves_givens() {
        let mut given = Board::new();
        given.place(Position::new(0, 0), Digit::D1);
        given.place(Position::new(0, 5), Digit::D1);
        let mut game = Game::from_board(given.clone());

        assert!(!game.solve());
        assert_eq!(game.board(), &given);
    }
}
