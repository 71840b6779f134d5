use std::{fmt::Display, str::FromStr};

use super::{
    errors::InvalidBoardError,
    game_state::{Cell, Side},
    input::Move,
};

pub const BOARD_SIZE: usize = 8;

/// 8x8 grid of cells. Copying a `Board` always yields an independent snapshot.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Default::default()
    }

    /// The 4-disc starting position: White on (3, 3) and (4, 4), Black on (3, 4) and (4, 3).
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.set(Move::new(3, 3), Cell::Disc(Side::White));
        board.set(Move::new(3, 4), Cell::Disc(Side::Black));
        board.set(Move::new(4, 3), Cell::Disc(Side::Black));
        board.set(Move::new(4, 4), Cell::Disc(Side::White));
        board
    }

    /// Builds a board from signed cell values: 0 empty, 1 White, -1 Black.
    pub fn from_rows<R: AsRef<[i8]>>(rows: &[R]) -> Result<Self, InvalidBoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(InvalidBoardError::WrongRowCount(rows.len()));
        }
        let mut board = Self::empty();
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != BOARD_SIZE {
                return Err(InvalidBoardError::WrongColumnCount { row, len: values.len() });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::from_value(value).ok_or(InvalidBoardError::InvalidCell { row, col, value })?;
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }

    /// Signed cell values, the inverse of `from_rows`.
    pub fn to_rows(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(Cell::value))
    }

    #[inline]
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row as usize][mv.col as usize]
    }

    #[inline]
    pub fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row as usize][mv.col as usize] = cell;
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (Move::new(row as u8, col as u8), cell))
        })
    }

    pub fn count(&self, side: Side) -> u32 {
        self.iter().filter(|(_, cell)| cell.is_side(side)).count() as u32
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> u32 {
        self.iter().filter(|(_, cell)| !cell.is_empty()).count() as u32
    }

    /// Signed sum of all cells: White discs minus Black discs.
    pub fn material(&self) -> i32 {
        self.cells.iter().flatten().map(|cell| cell.value() as i32).sum()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();
        f.debug_tuple("Board").field(&rows).finish()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("#")?;
        for col in 0..BOARD_SIZE {
            f.write_fmt(format_args!(" {col}"))?;
        }
        for (row, cells) in self.cells.iter().enumerate() {
            f.write_fmt(format_args!("\n{row}"))?;
            for cell in cells {
                f.write_fmt(format_args!(" {}", cell.symbol()))?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = InvalidBoardError;

    /// Parses the `Display` format, or 8 lines of 8 cell symbols (`-`, `W`, `B`)
    /// where whitespace between symbols is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|line| !line.is_empty() && line[0] != '#')
            .collect();
        if lines.len() != BOARD_SIZE {
            return Err(InvalidBoardError::WrongRowCount(lines.len()));
        }

        let mut board = Self::empty();
        for (row, line) in lines.iter().enumerate() {
            let symbols = match line.as_slice() {
                [label, rest @ ..] if rest.len() == BOARD_SIZE && label.is_ascii_digit() => rest,
                symbols => symbols,
            };
            if symbols.len() != BOARD_SIZE {
                return Err(InvalidBoardError::WrongColumnCount {
                    row,
                    len: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(InvalidBoardError::UnknownSymbol { row, col, symbol })?;
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }
}

impl TryFrom<&[Vec<i8>]> for Board {
    type Error = InvalidBoardError;

    fn try_from(rows: &[Vec<i8>]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl TryFrom<[[i8; BOARD_SIZE]; BOARD_SIZE]> for Board {
    type Error = InvalidBoardError;

    fn try_from(rows: [[i8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}
