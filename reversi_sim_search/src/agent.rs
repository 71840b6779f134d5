use std::time::Duration;

use reversi_sim::{prelude::*, thiserror};

use crate::mcts::{policy::UCT, LogObserver, MCTSConfig, MCTS};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgentError {
    #[error("unsupported board size {0}, only {BOARD_SIZE}x{BOARD_SIZE} boards are supported")]
    UnsupportedBoardSize(usize),
    #[error("invalid time limit {0}s, expected a finite non-negative number of seconds")]
    InvalidTimeLimit(f64),
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] InvalidBoardError),
}

/// Plays one side of a game, choosing each move with a fresh MCTS search
/// bounded by a per-move wall-clock budget.
pub struct Agent {
    side: Side,
    time_limit: Duration,
    search: MCTS<UCT, LogObserver>,
    last_counter: SearchCounter,
}

impl Agent {
    pub const DEFAULT_SEED: u64 = 0x5eed;

    /// Agent for `side` with `time_limit_secs` seconds per move.
    pub fn new(board_size: usize, side: Side, time_limit_secs: f64) -> Result<Self, AgentError> {
        Self::with_config(board_size, side, time_limit_secs, MCTSConfig::STANDARD, Self::DEFAULT_SEED)
    }

    /// Like `new` with explicit search parameters. An iteration cap in `config.limits`
    /// is kept; the time limit always comes from `time_limit_secs`.
    pub fn with_config(
        board_size: usize,
        side: Side,
        time_limit_secs: f64,
        config: MCTSConfig,
        seed: u64,
    ) -> Result<Self, AgentError> {
        if board_size != BOARD_SIZE {
            return Err(AgentError::UnsupportedBoardSize(board_size));
        }
        let time_limit = Duration::try_from_secs_f64(time_limit_secs)
            .map_err(|_| AgentError::InvalidTimeLimit(time_limit_secs))?;
        let limits = SearchLimits {
            max_time: Some(time_limit),
            max_iterations: config.limits.and_then(|l| l.max_iterations),
        };
        Ok(Self {
            side,
            time_limit,
            search: MCTS::new_with_observer(config.with_limits(limits), seed, LogObserver),
            last_counter: SearchCounter::ZERO,
        })
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Counters of the previous `choose_move` call that ran a search.
    #[inline]
    pub fn last_counter(&self) -> SearchCounter {
        self.last_counter
    }

    /// Picks a move for this agent's side, or `None` when it has to pass.
    ///
    /// `board` is only read. The search tree is built from a copy and dropped
    /// before returning.
    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        if !has_legal_move(board, self.side) {
            return None;
        }
        let result = self.search.search(board, self.side);
        self.last_counter = result.counter;
        self.search.clear();
        result.best_move
    }

    /// `choose_move` over a raw grid of `-1`/`0`/`1` cells.
    pub fn choose_move_raw(&mut self, rows: &[Vec<i8>]) -> Result<Option<Move>, AgentError> {
        let board = Board::try_from(rows)?;
        Ok(self.choose_move(&board))
    }
}
