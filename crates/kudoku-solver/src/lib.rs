//! Backtracking sudoku solver.
//!
//! Plain exhaustive depth-first search over a [`Board`], no propagation
//! techniques, no randomness: at each step the first empty cell in row-major
//! order is tried with digits 1-9 in ascending order, and a dead end undoes
//! the tentative placement. Deterministic for a given input.

pub mod backtracking;

pub use self::backtracking::{find_empty, solve};

#[doc(no_inline)]
pub use kudoku_core::Board;
