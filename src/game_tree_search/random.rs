use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use super::{GameTreeSearch, SearchCounter, SearchResult};
use crate::{
    rules::legal_moves,
    types::{board::Board, game_state::Side},
};

/// Baseline player that picks a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomSearch<R: Rng = SmallRng> {
    rng: R,
}

impl RandomSearch<SmallRng> {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSearch<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> GameTreeSearch for RandomSearch<R> {
    fn search(&mut self, board: &Board, to_move: Side) -> SearchResult {
        let moves = legal_moves(board, to_move);
        let best_move = moves.choose(&mut self.rng).copied();
        let counter = SearchCounter {
            iterations: 1,
            states_visited: moves.len() as u64,
            ..SearchCounter::ZERO
        };
        SearchResult::new(best_move, 0.5, counter)
    }
}
