//! Placement statistics for solution checking.

use std::fmt::{self, Display};

/// Counters maintained by the validity pass of a [`Game`](crate::Game).
///
/// The counters are read-only outside this crate: they are reset when a
/// session is created and at the start of each validity pass, incremented
/// during that pass, and stable in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementStats {
    correct_placements: u32,
    incorrect_placements: u32,
    games_checked: u32,
}

impl PlacementStats {
    /// Number of cells found conflict-free by the last validity pass.
    #[must_use]
    pub const fn correct_placements(self) -> u32 {
        self.correct_placements
    }

    /// Number of cells found conflicting by the last validity pass.
    #[must_use]
    pub const fn incorrect_placements(self) -> u32 {
        self.incorrect_placements
    }

    /// Number of validity passes run so far (the current game number).
    #[must_use]
    pub const fn games_checked(self) -> u32 {
        self.games_checked
    }

    /// Zeroes the per-pass placement counters, keeping the game counter.
    pub(crate) fn reset_placements(&mut self) {
        self.correct_placements = 0;
        self.incorrect_placements = 0;
    }

    pub(crate) fn record_correct(&mut self) {
        self.correct_placements += 1;
    }

    pub(crate) fn record_incorrect(&mut self) {
        self.incorrect_placements += 1;
    }

    pub(crate) fn record_game_checked(&mut self) {
        self.games_checked += 1;
    }
}

impl Display for PlacementStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics for game #{}:", self.games_checked)?;
        writeln!(f, "  digits on the right place: {}", self.correct_placements)?;
        write!(f, "  digits on a wrong place: {}", self.incorrect_placements)
    }
}
