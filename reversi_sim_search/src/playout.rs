use reversi_sim::{
    prelude::*,
    rand::{seq::SliceRandom, Rng},
};

/// Outcome of a single random playout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Playout {
    /// Material (white minus black discs) of the final board.
    pub material: i32,
    /// Plies played, passes included.
    pub plies: u32,
    /// Whether the playout stopped at the ply cap rather than at two consecutive passes.
    pub cutoff: bool,
}

/// Plays uniformly random moves from `board` with `to_move` first.
///
/// Stops after two consecutive passes or once `max_plies` plies (passes included) were played.
/// The frontier is computed once and maintained incrementally.
pub fn random_playout<R: Rng + ?Sized>(board: &Board, to_move: Side, max_plies: u32, rng: &mut R) -> Playout {
    let mut board = *board;
    let mut frontier = Frontier::from_board(&board);
    let mut side = to_move;
    let mut passed = false;
    let mut plies = 0;
    let mut cutoff = false;
    loop {
        let moves = legal_moves_via_frontier(&board, side, &frontier);
        if let Some(&mv) = moves.choose(rng) {
            apply_move(&mut board, side, mv);
            update_frontier(&mut frontier, &board, mv);
            passed = false;
        } else {
            if passed {
                break;
            }
            passed = true;
        }
        side = side.opposite();
        plies += 1;
        if plies >= max_plies {
            cutoff = true;
            break;
        }
    }
    Playout {
        material: board.material(),
        plies,
        cutoff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::black_must_pass;
    use reversi_sim::rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn playout_stops_at_the_ply_cap() {
        for seed in 0..4 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let playout = random_playout(&Board::standard(), Side::Black, 20, &mut rng);
            assert_eq!(playout.plies, 20, "seed {seed}");
            assert!(playout.cutoff, "seed {seed}");
        }

        let mut rng = SmallRng::seed_from_u64(0);
        let playout = random_playout(&Board::standard(), Side::Black, 1, &mut rng);
        assert_eq!(playout.plies, 1);
        assert!(playout.cutoff);
    }

    #[test]
    fn playout_ends_after_two_consecutive_passes() {
        let mut rng = SmallRng::seed_from_u64(0);
        let playout = random_playout(&Board::empty(), Side::Black, 20, &mut rng);
        assert_eq!(
            playout,
            Playout {
                material: 0,
                plies: 1,
                cutoff: false
            }
        );
    }

    #[test]
    fn pass_hands_the_turn_over_without_changing_the_board() {
        // Black passes, White takes b1 with c1, then neither side can move.
        let mut rng = SmallRng::seed_from_u64(0);
        let playout = random_playout(&black_must_pass(), Side::Black, 20, &mut rng);
        assert_eq!(
            playout,
            Playout {
                material: 3,
                plies: 3,
                cutoff: false
            }
        );
    }
}
