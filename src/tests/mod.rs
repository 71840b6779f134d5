use crate::prelude::*;



pub mod perft;




pub mod prop_tests;

/// Panics: If `s` is not a valid board.
pub fn board_from_str(s: &str) -> Board {
    s.parse().unwrap()
}

/// Sorted copy of a move list, for set comparisons.
pub fn sorted(moves: &[Move]) -> Vec<Move> {
    let mut v = moves.to_vec();
    v.sort();
    v
}

impl Board {
    /// Panics: If `mv` is not legal for `side`.
    fn play(self, side: Side, mv: Move) -> Board {
        let mut board = self;
        try_apply_move(&mut board, side, mv).unwrap();
        board
    }
}
