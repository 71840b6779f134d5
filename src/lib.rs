#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![doc = include_str!("../README.md")]

/// Module containing collection datatypes used by this crate.
pub mod data_structures;

/// Board, cell, side and move types, and the errors raised while building them.
pub mod types;

/// Reversed Reversi rules: move generation, move application and game status.
///
/// All functions are pure over a `Board` value, apart from `apply_move` and
/// `update_frontier` which mutate the board/frontier passed in.
pub mod rules;

/// Types shared by game tree search implementations.
pub mod game_tree_search;

/// Re-exports the `smallvec` crate
pub use smallvec;

/// Re-exports the `rand` create
pub use rand;

/// Re-exports the `thiserror` crate
pub use thiserror;

pub mod prelude {
    pub use crate::data_structures::MoveList;
    pub use crate::game_tree_search::{GameTreeSearch, RandomSearch, SearchCounter, SearchLimits, SearchResult};
    pub use crate::rules::{
        apply_move, has_legal_move, is_legal_move, legal_moves, legal_moves_via_frontier, perft, status,
        try_apply_move, update_frontier, Frontier,
    };
    pub use crate::types::board::{Board, BOARD_SIZE};
    pub use crate::types::by_player::ByPlayer;
    pub use crate::types::errors::{IllegalMove, InvalidBoardError, MoveParseError};
    pub use crate::types::game_state::{Cell, GameStatus, Side};
    pub use crate::types::input::Move;
}

#[cfg(test)]
mod tests;
