use super::{apply_move, has_legal_move, legal_moves};
use crate::types::{board::Board, game_state::Side};

/// Counts the leaf positions of the move tree `depth` plies below `board`.
///
/// When `side` cannot move but the opponent can, the pass counts as a ply.
/// Finished games count as a single leaf regardless of the remaining depth.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, side);
    if moves.is_empty() {
        if !has_legal_move(board, side.opposite()) {
            return 1;
        }
        return perft(board, side.opposite(), depth - 1);
    }
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| {
            let mut next = *board;
            apply_move(&mut next, side, mv);
            perft(&next, side.opposite(), depth - 1)
        })
        .sum()
}
