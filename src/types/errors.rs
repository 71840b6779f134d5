use super::{game_state::Side, input::Move};

/// Raised when a board cannot be built from external input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidBoardError {
    #[error("expected 8 rows, found {0}")]
    WrongRowCount(usize),
    #[error("row {row}: expected 8 cells, found {len}")]
    WrongColumnCount { row: usize, len: usize },
    #[error("cell ({row}, {col}) holds invalid value {value}")]
    InvalidCell { row: usize, col: usize, value: i8 },
    #[error("cell ({row}, {col}) holds unknown symbol {symbol:?}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
}

/// Raised by `try_apply_move` when the target is occupied or captures nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{side} cannot play {mv}")]
pub struct IllegalMove {
    pub mv: Move,
    pub side: Side,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse move from {0:?}, expected \"row,col\" or a square such as \"d3\"")]
pub struct MoveParseError(pub String);
