#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

/// Implementation for Monte-Carlo Tree Search
pub mod mcts;

/// Random playouts for the simulation step
pub mod playout;

/// Single-side player that picks a move under a wall-clock budget
pub mod agent;

pub use reversi_sim::game_tree_search::{GameTreeSearch, RandomSearch, SearchCounter, SearchLimits, SearchResult};

pub mod prelude {
    pub use crate::agent::{Agent, AgentError};
    pub use crate::mcts::{LogObserver, MCTSConfig, NoopObserver, SearchObserver, MCTS};
    pub use crate::{GameTreeSearch, SearchCounter, SearchLimits, SearchResult};
}

#[cfg(test)]
mod tests;
