use crate::{
    data_structures::MoveList,
    types::{
        board::Board,
        errors::IllegalMove,
        game_state::{Cell, GameStatus, Side},
        input::Move,
    },
};

mod frontier;
pub use frontier::*;

mod perft;
pub use perft::*;

/// The 8 ray directions as `(d_row, d_col)`.
pub const DIRECTIONS: [(i8, i8); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// Walks from `from` (exclusive) in direction `(dr, dc)` over a contiguous run of
/// `opponent` discs. Returns the run length and the first cell past the run, or
/// `None` if the run reaches the edge of the board.
#[inline]
fn scan_run(board: &Board, from: Move, (dr, dc): (i8, i8), opponent: Side) -> (u8, Option<Move>) {
    let mut run = 0;
    let mut cur = from.offset(dr, dc);
    while let Some(pos) = cur {
        if !board.get(pos).is_side(opponent) {
            break;
        }
        run += 1;
        cur = pos.offset(dr, dc);
    }
    (run, cur)
}

/// Whether placing a `side` disc on `target` captures along direction `dir`.
#[inline]
fn captures_along(board: &Board, side: Side, target: Move, dir: (i8, i8)) -> bool {
    match scan_run(board, target, dir, side.opposite()) {
        (run, Some(end)) if run > 0 => board.get(end).is_side(side),
        _ => false,
    }
}

/// Enumerates every cell where `side` may place a disc.
///
/// Scans outward from each `side` disc across a run of opponent discs; the empty
/// cell ending a non-empty run is a destination. The result is deduplicated and
/// ordered by discovery.
pub fn legal_moves(board: &Board, side: Side) -> MoveList {
    let mut moves = MoveList::new();
    let mut seen = 0u64;
    let opponent = side.opposite();
    for (origin, cell) in board.iter() {
        if !cell.is_side(side) {
            continue;
        }
        for dir in DIRECTIONS {
            let (run, end) = scan_run(board, origin, dir, opponent);
            let Some(target) = end else { continue };
            if run > 0 && board.get(target).is_empty() && seen & target.bit() == 0 {
                seen |= target.bit();
                moves.push(target);
            }
        }
    }
    moves
}

/// Same result as `legal_moves(board, side) != []` without building the list.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .any(|(target, _)| DIRECTIONS.iter().any(|&dir| captures_along(board, side, target, dir)))
}

/// Whether `side` may place a disc on `mv`.
pub fn is_legal_move(board: &Board, side: Side, mv: Move) -> bool {
    board.get(mv).is_empty() && DIRECTIONS.iter().any(|&dir| captures_along(board, side, mv, dir))
}

/// Places a `side` disc on `mv` and flips every outflanked opponent run.
/// Returns the number of flipped discs.
///
/// Legality is not checked: callers pass moves produced by the move generators.
pub fn apply_move(board: &mut Board, side: Side, mv: Move) -> u32 {
    board.set(mv, Cell::Disc(side));
    let mut flipped = 0;
    for dir in DIRECTIONS {
        if !captures_along(board, side, mv, dir) {
            continue;
        }
        let (dr, dc) = dir;
        let mut cur = mv.offset(dr, dc);
        while let Some(pos) = cur {
            if !board.get(pos).is_side(side.opposite()) {
                break;
            }
            board.set(pos, Cell::Disc(side));
            flipped += 1;
            cur = pos.offset(dr, dc);
        }
    }
    flipped
}

/// Checked variant of `apply_move`. The board is untouched on error.
pub fn try_apply_move(board: &mut Board, side: Side, mv: Move) -> Result<u32, IllegalMove> {
    if !is_legal_move(board, side, mv) {
        return Err(IllegalMove { mv, side });
    }
    Ok(apply_move(board, side, mv))
}

/// Status of `board` after `just_moved` has moved (or passed).
///
/// The game goes on while either side can move. Otherwise the side with fewer
/// discs wins: a positive material sum is a win for Black.
pub fn status(board: &Board, just_moved: Side) -> GameStatus {
    if has_legal_move(board, just_moved.opposite()) || has_legal_move(board, just_moved) {
        return GameStatus::Ongoing;
    }
    GameStatus::from_material(board.material())
}
