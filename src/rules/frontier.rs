use super::{captures_along, DIRECTIONS};
use crate::{
    data_structures::MoveList,
    types::{board::Board, game_state::Side, input::Move},
};

/// Set of empty cells adjacent to at least one occupied cell.
///
/// Every legal destination is adjacent to an opponent disc, so the frontier
/// always contains all of them. Stored as a 64-bit set indexed by `Move::index`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frontier(u64);

impl Frontier {
    /// Computes the frontier of `board` from scratch.
    pub fn from_board(board: &Board) -> Self {
        let mut frontier = Self::default();
        for (mv, cell) in board.iter() {
            if cell.is_empty() && mv.neighbors().any(|n| !board.get(n).is_empty()) {
                frontier.insert(mv);
            }
        }
        frontier
    }

    #[inline]
    pub fn contains(self, mv: Move) -> bool {
        self.0 & mv.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, mv: Move) {
        self.0 |= mv.bit();
    }

    #[inline]
    pub fn remove(&mut self, mv: Move) {
        self.0 &= !mv.bit();
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cells in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Move> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(Move::from_index(index))
        })
    }
}

impl FromIterator<Move> for Frontier {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        let mut frontier = Self::default();
        for mv in iter {
            frontier.insert(mv);
        }
        frontier
    }
}

/// Legal moves for `side`, testing only the cells in `frontier`.
///
/// Returns the same set as `legal_moves` whenever `frontier` is the frontier of
/// `board`; the order differs (row-major here).
pub fn legal_moves_via_frontier(board: &Board, side: Side, frontier: &Frontier) -> MoveList {
    frontier
        .iter()
        .filter(|&target| board.get(target).is_empty())
        .filter(|&target| DIRECTIONS.iter().any(|&dir| captures_along(board, side, target, dir)))
        .collect()
}

/// Incremental frontier maintenance after a disc was placed on `mv`: removes `mv`
/// and adds its empty neighbours.
pub fn update_frontier(frontier: &mut Frontier, board: &Board, mv: Move) {
    frontier.remove(mv);
    for n in mv.neighbors() {
        if board.get(n).is_empty() {
            frontier.insert(n);
        }
    }
}
