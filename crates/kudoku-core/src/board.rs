//! The 9×9 sudoku board.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Digit, Position};

/// Side length of the board.
pub const GRID_SIZE: usize = 9;

/// Side length of a 3×3 block.
pub const BLOCK_SIZE: usize = 3;

/// A 9×9 grid of cells, each either empty or holding a [`Digit`].
///
/// `Board` is a plain value type: it owns its cells exclusively and is cheap
/// to clone. The solver and generator mutate a board in place through the
/// accessors below; in-range cell values are guaranteed by the type
/// (`Option<Digit>`), so no stored value can ever be out of range.
///
/// # Text form
///
/// [`FromStr`] accepts the compact grid notation used throughout the tests:
/// digits `1`-`9` for filled cells, `0`, `_`, or `.` for empty cells, with
/// all whitespace ignored. [`Display`] renders the same notation with rows on
/// separate lines and columns grouped by block.
///
/// ```
/// use kudoku_core::Board;
///
/// let board: Board = "
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
/// assert_eq!(board.filled_count(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Digit>; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates an all-empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from raw cell values, `0` meaning empty.
    ///
    /// This is the bulk-replace entry point: callers hand over a full matrix
    /// and receive a board with the in-range invariant checked at this
    /// boundary.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    #[must_use]
    pub fn from_values(values: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut board = Self::new();
        for pos in Position::ALL {
            let value = values[usize::from(pos.row())][usize::from(pos.col())];
            assert!(value <= 9, "Invalid cell value: {value}");
            board.set(pos, Digit::try_from_value(value));
        }
        board
    }

    /// Returns the cell at `pos`, `None` meaning empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Sets the cell at `pos`.
    pub fn set(&mut self, pos: Position, cell: Option<Digit>) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = cell;
    }

    /// Places a digit at `pos`.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.set(pos, Some(digit));
    }

    /// Empties the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, None);
    }

    /// Empties every cell.
    pub fn clear_all(&mut self) {
        self.cells = [[None; GRID_SIZE]; GRID_SIZE];
    }

    /// Returns the number of filled cells on the whole board.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_some())
            .count()
    }

    /// Returns the number of filled cells in the given 3×3 block (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `block` is not in the range 0-8.
    #[must_use]
    pub fn block_filled_count(&self, block: u8) -> usize {
        Position::block_positions(block)
            .into_iter()
            .filter(|&pos| self.get(pos).is_some())
            .count()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            match self.get(pos) {
                Some(digit) => Display::fmt(&digit, f)?,
                None => f.write_char('_')?,
            }
            if i % GRID_SIZE == GRID_SIZE - 1 {
                if i < GRID_SIZE * GRID_SIZE - 1 {
                    f.write_char('\n')?;
                }
            } else if i % BLOCK_SIZE == BLOCK_SIZE - 1 {
                f.write_char(' ')?;
            }
        }
        Ok(())
    }
}

/// Error parsing a [`Board`] from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The text contains a character that is neither a cell nor whitespace.
    #[display("unexpected character {_0:?} in board text")]
    UnexpectedCharacter(#[error(not(source))] char),
    /// The text does not describe exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::new();
        let mut count = 0usize;
        for c in s.chars() {
            let cell = match c {
                c if c.is_whitespace() => continue,
                '0' | '_' | '.' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = c as u8 - b'0';
                    Some(Digit::from_value(value))
                }
                c => return Err(BoardParseError::UnexpectedCharacter(c)),
            };
            if count == GRID_SIZE * GRID_SIZE {
                return Err(BoardParseError::WrongCellCount(count + 1));
            }
            board.set(Position::ALL[count], cell);
            count += 1;
        }
        if count != GRID_SIZE * GRID_SIZE {
            return Err(BoardParseError::WrongCellCount(count));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled_count(), 0);
        for pos in Position::ALL {
            assert_eq!(board.get(pos), None);
        }
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        let pos = Position::new(4, 7);
        board.place(pos, Digit::D3);
        assert_eq!(board.get(pos), Some(Digit::D3));
        assert_eq!(board.filled_count(), 1);
        assert_eq!(board.block_filled_count(pos.block_index()), 1);
        board.clear(pos);
        assert_eq!(board.get(pos), None);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_from_values() {
        let mut values = [[0u8; GRID_SIZE]; GRID_SIZE];
        values[0][0] = 5;
        values[8][8] = 9;
        let board = Board::from_values(values);
        assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(board.get(Position::new(8, 8)), Some(Digit::D9));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    #[should_panic(expected = "Invalid cell value: 10")]
    fn test_from_values_out_of_range_panics() {
        let mut values = [[0u8; GRID_SIZE]; GRID_SIZE];
        values[3][3] = 10;
        let _ = Board::from_values(values);
    }

    #[test]
    fn test_parse_accepts_all_empty_markers() {
        let text = "0________".repeat(3) + &".________".repeat(3) + &"_________".repeat(3);
        let board: Board = text.parse().unwrap();
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let text = "x".to_string() + &"_".repeat(80);
        assert_eq!(
            text.parse::<Board>(),
            Err(BoardParseError::UnexpectedCharacter('x'))
        );
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        assert_eq!(
            "_".repeat(80).parse::<Board>(),
            Err(BoardParseError::WrongCellCount(80))
        );
        assert_eq!(
            "_".repeat(82).parse::<Board>(),
            Err(BoardParseError::WrongCellCount(82))
        );
    }

    #[test]
    fn test_display_groups_by_block() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), Digit::D5);
        board.place(Position::new(0, 3), Digit::D7);
        let first_line = board.to_string().lines().next().unwrap().to_string();
        assert_eq!(first_line, "5__ 7__ ___");
    }

    fn board_strategy() -> impl Strategy<Value = Board> {
        prop::collection::vec((0..81usize, 1..=9u8), 0..50).prop_map(|placements| {
            let mut board = Board::new();
            for (cell, value) in placements {
                board.set(Position::ALL[cell], Digit::try_from_value(value));
            }
            board
        })
    }

    proptest! {
        #[test]
        fn test_display_parse_round_trip(board in board_strategy()) {
            let rendered = board.to_string();
            let parsed: Board = rendered.parse().unwrap();
            prop_assert_eq!(parsed, board);
        }

        #[test]
        fn test_filled_count_matches_blocks(board in board_strategy()) {
            let by_blocks: usize = (0..9).map(|b| board.block_filled_count(b)).sum();
            prop_assert_eq!(by_blocks, board.filled_count());
        }
    }
}
