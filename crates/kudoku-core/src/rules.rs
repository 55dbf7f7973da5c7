//! The sudoku rule checker.
//!
//! Pure predicates over a [`Board`]: placement legality, the fully-placed
//! test, and structural puzzle validity. The solver, the generator, and the
//! validity pass in `kudoku-game` all share these; none of them keeps rule
//! state of its own.
//!
//! Two overlapping but distinct validity notions live here and must stay
//! separate (they answer different questions):
//!
//! - [`is_valid_puzzle`] tolerates empty cells and additionally enforces the
//!   ≤[`MAX_FILLED_PER_BLOCK`] generation constraint. It self-checks
//!   generator output.
//! - The solved-board check (`Game::check_validity` in `kudoku-game`)
//!   requires a fully placed board and has no block-density rule.

use crate::{Board, Digit, Position};

/// Maximum number of filled cells a generated puzzle may keep per 3×3 block.
///
/// This is generator policy rather than a sudoku rule, but the structural
/// validity predicate enforces it so generator output can be checked with a
/// single call.
pub const MAX_FILLED_PER_BLOCK: usize = 6;

/// Returns whether `digit` may legally sit at `pos`.
///
/// Scans the full row, the full column, and the 3×3 block containing `pos`,
/// excluding `pos` itself; false iff the digit already occurs in any of them.
/// No side effects; constant work (27 cells).
///
/// Because the cell itself is excluded in all three scans, the predicate is
/// also meaningful on an already-filled cell: it then answers "is this cell
/// free of conflicts".
#[must_use]
pub fn placement_allowed(board: &Board, pos: Position, digit: Digit) -> bool {
    let in_row = pos.row_positions();
    let in_col = pos.col_positions();
    let in_block = Position::block_positions(pos.block_index());
    in_row
        .into_iter()
        .chain(in_col)
        .chain(in_block)
        .all(|p| p == pos || board.get(p) != Some(digit))
}

/// Returns whether every cell of the board is filled.
#[must_use]
pub fn is_fully_placed(board: &Board) -> bool {
    Position::ALL.into_iter().all(|pos| board.get(pos).is_some())
}

/// Returns whether the board is a structurally valid puzzle.
///
/// Every filled cell must be duplicate-free in its row, column, and block
/// (empty cells are fine), and no block may hold more than
/// [`MAX_FILLED_PER_BLOCK`] filled cells. Returns false on the first
/// violation found.
#[must_use]
pub fn is_valid_puzzle(board: &Board) -> bool {
    for pos in Position::ALL {
        let Some(digit) = board.get(pos) else {
            continue;
        };
        if !placement_allowed(board, pos, digit) {
            return false;
        }
    }
    (0..9).all(|block| board.block_filled_count(block) <= MAX_FILLED_PER_BLOCK)
}

/// Counts the conflicts of the cell at `pos` with the rest of the board.
///
/// A conflict is another cell holding the same digit in the same row, the
/// same column, or the same block; block cells sharing the row or column are
/// skipped because the row and column scans already counted them. Empty
/// cells have no conflicts.
#[must_use]
pub fn conflict_count(board: &Board, pos: Position) -> usize {
    let Some(digit) = board.get(pos) else {
        return 0;
    };
    let row_conflicts = pos
        .row_positions()
        .into_iter()
        .filter(|&p| p != pos && board.get(p) == Some(digit))
        .count();
    let col_conflicts = pos
        .col_positions()
        .into_iter()
        .filter(|&p| p != pos && board.get(p) == Some(digit))
        .count();
    let block_conflicts = Position::block_positions(pos.block_index())
        .into_iter()
        .filter(|&p| {
            p.row() != pos.row() && p.col() != pos.col() && board.get(p) == Some(digit)
        })
        .count();
    row_conflicts + col_conflicts + block_conflicts
}
