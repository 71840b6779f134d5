use reversi_sim::prelude::*;

pub mod agent;

/// Black owns a1, White owns b1: Black's only move is c1.
pub fn single_move_for_black() -> Board {
    board_from_str(
        "
        B W - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        ",
    )
}

/// White owns a1, Black owns b1: Black cannot move, White can.
pub fn black_must_pass() -> Board {
    board_from_str(
        "
        W B - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        - - - - - - - -
        ",
    )
}

/// Panics: If `s` is not a valid board.
pub fn board_from_str(s: &str) -> Board {
    s.parse().unwrap()
}

pub trait Play {
    fn play(self, side: Side, mv: Move) -> Self;
}

impl Play for Board {
    /// Panics: If `mv` is not legal for `side`.
    fn play(self, side: Side, mv: Move) -> Board {
        let mut board = self;
        try_apply_move(&mut board, side, mv).unwrap();
        board
    }
}
