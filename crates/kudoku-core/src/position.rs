//! Board coordinates and 3×3 block addressing.

use crate::board::{BLOCK_SIZE, GRID_SIZE};

/// A cell coordinate on the 9×9 board.
///
/// Rows and columns are 0-8, counted from the top-left corner. Blocks (the
/// nine non-overlapping 3×3 subgrids) are indexed 0-8 left to right, top to
/// bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    ///
    /// The generator's fill cursor, the solver's first-empty scan, and the
    /// persistence layer all traverse the board in this order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < GRID_SIZE as u8 && col < GRID_SIZE as u8);
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index (0-8) of the 3×3 block containing this position.
    #[must_use]
    pub const fn block_index(self) -> u8 {
        (self.row / BLOCK_SIZE as u8) * BLOCK_SIZE as u8 + self.col / BLOCK_SIZE as u8
    }

    /// Returns the top-left cell of the 3×3 block containing this position.
    #[must_use]
    pub const fn block_origin(self) -> Self {
        Self {
            row: self.row - self.row % BLOCK_SIZE as u8,
            col: self.col - self.col % BLOCK_SIZE as u8,
        }
    }

    /// Returns the nine positions of the given 3×3 block, row-major within
    /// the block.
    ///
    /// # Panics
    ///
    /// Panics if `block` is not in the range 0-8.
    #[must_use]
    pub const fn block_positions(block: u8) -> [Self; 9] {
        assert!(block < 9);
        let base_row = (block / BLOCK_SIZE as u8) * BLOCK_SIZE as u8;
        let base_col = (block % BLOCK_SIZE as u8) * BLOCK_SIZE as u8;
        let mut positions = [Self { row: 0, col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            positions[i] = Self {
                row: base_row + (i / 3) as u8,
                col: base_col + (i % 3) as u8,
            };
            i += 1;
        }
        positions
    }

    /// Returns the positions of the row containing this position.
    #[must_use]
    pub fn row_positions(self) -> [Self; 9] {
        std::array::from_fn(|col| {
            #[expect(clippy::cast_possible_truncation)]
            Self::new(self.row, col as u8)
        })
    }

    /// Returns the positions of the column containing this position.
    #[must_use]
    pub fn col_positions(self) -> [Self; 9] {
        std::array::from_fn(|row| {
            #[expect(clippy::cast_possible_truncation)]
            Self::new(row as u8, self.col)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(0, 8));
        assert_eq!(Position::ALL[9], Position::new(1, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    fn test_block_index() {
        assert_eq!(Position::new(0, 0).block_index(), 0);
        assert_eq!(Position::new(0, 8).block_index(), 2);
        assert_eq!(Position::new(4, 4).block_index(), 4);
        assert_eq!(Position::new(8, 0).block_index(), 6);
        assert_eq!(Position::new(8, 8).block_index(), 8);
    }

    #[test]
    fn test_block_origin() {
        assert_eq!(Position::new(4, 7).block_origin(), Position::new(3, 6));
        assert_eq!(Position::new(0, 0).block_origin(), Position::new(0, 0));
        assert_eq!(Position::new(8, 8).block_origin(), Position::new(6, 6));
    }

    #[test]
    fn test_block_positions_cover_the_block() {
        for block in 0..9 {
            let positions = Position::block_positions(block);
            for pos in positions {
                assert_eq!(pos.block_index(), block);
            }
            // All distinct.
            for (i, a) in positions.iter().enumerate() {
                for b in &positions[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_row_and_col_positions() {
        let pos = Position::new(3, 5);
        for (col, p) in pos.row_positions().into_iter().enumerate() {
            assert_eq!(p, Position::new(3, u8::try_from(col).unwrap()));
        }
        for (row, p) in pos.col_positions().into_iter().enumerate() {
            assert_eq!(p, Position::new(u8::try_from(row).unwrap(), 5));
        }
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_out_of_range_panics() {
        let _ = Position::new(9, 0);
    }
}
