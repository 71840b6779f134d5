use std::ops::Range;

use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

use crate::prelude::*;

/// A position reached from the standard start by random play, together with the
/// incrementally maintained frontier.
#[derive(Debug, Clone)]
pub struct ReachablePosition {
    pub board: Board,
    pub to_move: Side,
    pub frontier: Frontier,
    pub plies: usize,
}

impl ReachablePosition {
    /// Plays up to `steps` random plies (passes included), stopping early when
    /// neither side can move.
    pub fn random_game(seed: u64, steps: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::standard();
        let mut frontier = Frontier::from_board(&board);
        let mut to_move = Side::FIRST;
        let mut plies = 0;
        for _ in 0..steps {
            let moves = legal_moves(&board, to_move);
            if let Some(&mv) = moves.choose(&mut rng) {
                apply_move(&mut board, to_move, mv);
                update_frontier(&mut frontier, &board, mv);
            } else if !has_legal_move(&board, to_move.opposite()) {
                break;
            }
            to_move = to_move.opposite();
            plies += 1;
        }
        Self {
            board,
            to_move,
            frontier,
            plies,
        }
    }
}

pub struct ArbReachablePosition {
    pub steps: Range<usize>,
    pub arb_seed: <u64 as Arbitrary>::Strategy,
}

impl ArbReachablePosition {
    const MAX_STEPS: usize = 80usize;
    /// 60 moves, each possibly preceded by a pass.
    const FULL_GAME_STEPS: usize = 121usize;

    pub fn new() -> Self {
        Self {
            steps: 0..Self::MAX_STEPS,
            arb_seed: u64::arbitrary(),
        }
    }

    pub fn finished() -> Self {
        Self {
            steps: Self::FULL_GAME_STEPS..Self::FULL_GAME_STEPS + 1,
            arb_seed: u64::arbitrary(),
        }
    }

    pub fn arb(self) -> impl Strategy<Value = ReachablePosition> {
        (self.steps, self.arb_seed).prop_map(|(steps, seed)| ReachablePosition::random_game(seed, steps))
    }
}

pub fn arb_reachable_position() -> impl Strategy<Value = ReachablePosition> {
    ArbReachablePosition::new().arb()
}

pub fn arb_finished_position() -> impl Strategy<Value = ReachablePosition> {
    ArbReachablePosition::finished().arb()
}

prop_compose! {
    pub fn arb_reachable_position_with_move()(pos in arb_reachable_position(), seed in any::<u64>())
        -> (ReachablePosition, Option<Move>) {
        let moves = legal_moves(&pos.board, pos.to_move);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mv = moves.choose(&mut rng).copied();
        (pos, mv)
    }
}
