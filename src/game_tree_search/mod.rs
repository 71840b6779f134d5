use std::{ops::Add, time::Duration};

use crate::types::{board::Board, game_state::Side, input::Move};

mod random;
pub use random::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounter {
    /// Number of completed search iterations.
    pub iterations: u64,
    /// Number of states visited through node expansion and playout moves.
    pub states_visited: u64,
    /// Number of random playouts that ended before the game was over.
    pub cutoff_playouts: u64,
    /// Deepest tree node a playout was started from.
    pub max_depth: u8,
}

impl SearchCounter {
    pub const ZERO: SearchCounter = SearchCounter {
        iterations: 0,
        states_visited: 0,
        cutoff_playouts: 0,
        max_depth: 0,
    };

    #[inline]
    pub fn add_in_place(&mut self, c: &SearchCounter) {
        self.iterations += c.iterations;
        self.states_visited += c.states_visited;
        self.cutoff_playouts += c.cutoff_playouts;
        self.max_depth = self.max_depth.max(c.max_depth);
    }

    pub fn summary(&self, dt_ns: u128) -> String {
        let dt_ms: f64 = 1e-6 * (dt_ns as f64);
        let dt_ns = dt_ns.max(1) as f64;
        let rate: f64 = 1e3 * (self.states_visited as f64) / dt_ns;
        let iter_rate: f64 = 1e9 * (self.iterations as f64) / dt_ns;
        format!("dt={dt_ms:.2}ms rate={rate:.4} Mstates/s iters={iter_rate:.0}/s")
    }
}

impl Add for SearchCounter {
    type Output = SearchCounter;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut a = self;
        a.add_in_place(&rhs);
        a
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Move to play, `None` if the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Estimated score of `best_move` for the side to move, in `[0, 1]`.
    pub eval: f32,
    pub counter: SearchCounter,
}

impl SearchResult {
    #[inline]
    pub fn new(best_move: Option<Move>, eval: f32, counter: SearchCounter) -> Self {
        SearchResult {
            best_move,
            eval,
            counter,
        }
    }
}

pub trait GameTreeSearch {
    /// Chooses a move for `to_move` on `board`.
    fn search(&mut self, board: &Board, to_move: Side) -> SearchResult;
}

impl<T: GameTreeSearch + ?Sized> GameTreeSearch for Box<T> {
    fn search(&mut self, board: &Board, to_move: Side) -> SearchResult {
        (**self).search(board, to_move)
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    pub max_time: Option<Duration>,
    pub max_iterations: Option<u64>,
}

impl SearchLimits {
    pub fn time(max_time: Duration) -> Self {
        Self {
            max_time: Some(max_time),
            max_iterations: None,
        }
    }

    pub fn iterations(max_iterations: u64) -> Self {
        Self {
            max_time: None,
            max_iterations: Some(max_iterations),
        }
    }

    /// Limits with the time budget scaled by `fraction`.
    pub fn scale_time(self, fraction: f64) -> Self {
        Self {
            max_time: self.max_time.map(|t| t.mul_f64(fraction.max(0.0))),
            ..self
        }
    }

    pub fn should_terminate(&self, elapsed: Duration, iterations: u64) -> bool {
        if let Some(max_time) = self.max_time {
            if elapsed >= max_time {
                return true;
            }
        }
        if let Some(max_iterations) = self.max_iterations {
            if iterations >= max_iterations {
                return true;
            }
        }

        false
    }
}
