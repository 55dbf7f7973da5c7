//! The recursive search itself.

use kudoku_core::{Board, Digit, Position, rules};

/// Returns the first empty cell in row-major order, if any.
#[must_use]
pub fn find_empty(board: &Board) -> Option<Position> {
    Position::ALL
        .into_iter()
        .find(|&pos| board.get(pos).is_none())
}

/// Fills every empty cell of `board` with a consistent assignment, in place.
///
/// Returns true when a solution was found; the board then holds it. Returns
/// false when no solution is reachable from the current filled cells; every
/// cell the search touched has then been restored to empty, so the board is
/// back in its input state.
///
/// The search only ever writes to cells it found empty, so given (non-empty)
/// cells are preserved through the whole search, on success and on failure
/// alike. Recursion depth is bounded by the 81 cells of the board.
///
/// Note that a false return does not distinguish "the givens already
/// conflict" from "the givens are consistent but admit no completion"; both
/// are normal outcomes, not errors.
///
/// # Examples
///
/// ```
/// use kudoku_solver::solve;
///
/// let mut board = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
/// assert!(solve(&mut board));
/// assert_eq!(board.filled_count(), 81);
/// ```
pub fn solve(board: &mut Board) -> bool {
    let Some(pos) = find_empty(board) else {
        // No empty cell left: the board is a solution.
        return true;
    };

    for digit in Digit::ALL {
        if rules::placement_allowed(board, pos, digit) {
            board.place(pos, digit);
            if solve(board) {
                return true;
            }
            board.clear(pos);
        }
    }

    false
}
