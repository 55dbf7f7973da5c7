//! Game sessions and solution scoring for kudoku.
//!
//! A [`Game`] owns a board and its [`PlacementStats`]. It is the surface the
//! CLI drives: generate a puzzle, load or solve a board, then score the
//! completed board with [`Game::check_validity`] and read the counters.
//!
//! The validity pass deliberately differs from the structural puzzle check
//! in `kudoku_core::rules`: it requires a fully placed board and knows
//! nothing about the generator's block-density policy.

pub mod game;
pub mod stats;

pub use self::{game::Game, stats::PlacementStats};
