//! Core data structures and rule checking for the kudoku workspace.
//!
//! This crate provides the value types the rest of the workspace is built
//! on, plus the pure rule checker shared by the solver, the generator, and
//! the validity pass:
//!
//! - [`Digit`]: type-safe sudoku digits 1-9 (an empty cell is
//!   `Option::<Digit>::None`, never a sentinel value)
//! - [`Position`]: row/column coordinates with 3×3 block addressing
//! - [`Board`]: the 9×9 grid, a plain value type with accessors, bulk
//!   replace, and a compact text form
//! - [`rules`]: placement legality, the fully-placed test, structural puzzle
//!   validity, and per-cell conflict counting
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Board, Digit, Position, rules};
//!
//! let mut board = Board::new();
//! let pos = Position::new(0, 0);
//! assert!(rules::placement_allowed(&board, pos, Digit::D5));
//!
//! board.place(pos, Digit::D5);
//! // 5 now conflicts everywhere else in the first row.
//! assert!(!rules::placement_allowed(&board, Position::new(0, 8), Digit::D5));
//! ```

pub mod board;
pub mod digit;
pub mod position;
pub mod rules;

pub use self::{
    board::{BLOCK_SIZE, Board, BoardParseError, GRID_SIZE},
    digit::Digit,
    position::Position,
};
