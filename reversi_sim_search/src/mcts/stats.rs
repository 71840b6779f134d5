use std::{
    fmt::Display,
    ops::{Add, AddAssign},
};

use reversi_sim::prelude::Side;

/// Visit statistics of a search node.
///
/// `wins` and `losses` are weighted by the final disc margin of each playout,
/// `ties` counts drawn playouts once each.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub visits: u32,
    pub wins: u64,
    pub losses: u64,
    pub ties: u32,
}

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}W/{}L/{}T n={}", self.wins, self.losses, self.ties, self.visits)
    }
}

impl Stats {
    #[inline]
    pub fn new(visits: u32, wins: u64, losses: u64, ties: u32) -> Self {
        Self {
            visits,
            wins,
            losses,
            ties,
        }
    }

    /// Share of weighted outcomes that were not losses, `0.0` before the first visit.
    #[inline]
    pub fn ratio(self) -> f64 {
        let total = self.wins + self.losses + self.ties as u64;
        if total == 0 {
            return 0.0;
        }
        (self.wins + self.ties as u64) as f64 / total as f64
    }

    /// Records one playout ending at material `result`, seen from a node where
    /// `to_move` is the side to move.
    #[inline]
    pub fn record(&mut self, to_move: Side, result: i32) {
        self.visits += 1;
        let margin = result.unsigned_abs() as u64;
        match (to_move.sign() * result).signum() {
            1 => self.wins += margin,
            -1 => self.losses += margin,
            _ => self.ties += 1,
        }
    }
}

impl Add for Stats {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.visits + rhs.visits,
            self.wins + rhs.wins,
            self.losses + rhs.losses,
            self.ties + rhs.ties,
        )
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
