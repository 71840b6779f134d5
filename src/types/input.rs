use std::{fmt::Display, str::FromStr};

use super::{
    board::BOARD_SIZE,
    errors::{InvalidBoardError, MoveParseError},
};

/// A `(row, col)` coordinate of the empty cell being claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {})", self.row, self.col))
    }
}

impl Move {
    /// Panics in debug builds if the coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    pub fn try_new(row: usize, col: usize) -> Result<Self, InvalidBoardError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(InvalidBoardError::OutOfBounds { row, col })
        }
    }

    /// Row-major index in `0..64`.
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
    }

    #[inline]
    pub(crate) fn bit(self) -> u64 {
        1u64 << self.index()
    }

    /// The adjacent coordinate in direction `(dr, dc)`, if it is on the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Move> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Move::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// The on-board 8-neighbourhood of this coordinate.
    pub fn neighbors(self) -> impl Iterator<Item = Move> {
        crate::rules::DIRECTIONS
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// Square name with columns `a..h` and rows `1..8`, e.g. `(2, 3)` is `d3`.
    pub fn square_name(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MoveParseError(s.to_string());
        let t = s.trim().trim_start_matches('(').trim_end_matches(')');
        if let Some((r, c)) = t.split_once(',') {
            let row: usize = r.trim().parse().map_err(|_| err())?;
            let col: usize = c.trim().parse().map_err(|_| err())?;
            return Move::try_new(row, col).map_err(|_| err());
        }

        let mut chars = t.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };
        let col = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => (c as u8 - b'a') as usize,
            _ => return Err(err()),
        };
        let row = match rank.to_digit(10) {
            Some(d @ 1..=8) => d as usize - 1,
            _ => return Err(err()),
        };
        Move::try_new(row, col).map_err(|_| err())
    }
}
