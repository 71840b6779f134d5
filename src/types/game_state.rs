use std::fmt::Display;

/// One of the two players. The discriminant sign is the value a disc of this side
/// contributes to `Board::material`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

impl Side {
    /// Black moves first from the standard position.
    pub const FIRST: Side = Side::Black;

    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// +1 for White, -1 for Black.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    #[inline]
    pub fn from_sign(value: i8) -> Option<Side> {
        match value {
            1 => Some(Side::White),
            -1 => Some(Side::Black),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Disc(Side),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn is_side(self, side: Side) -> bool {
        self == Cell::Disc(side)
    }

    /// Signed value of the cell: 0 when empty, otherwise the sign of the owner.
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Disc(Side::White) => 1,
            Cell::Disc(Side::Black) => -1,
        }
    }

    #[inline]
    pub fn from_value(value: i8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            v => Side::from_sign(v).map(Cell::Disc),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Disc(Side::White) => 'W',
            Cell::Disc(Side::Black) => 'B',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '-' | '.' => Some(Cell::Empty),
            'W' | 'w' | 'O' | 'o' => Some(Cell::Disc(Side::White)),
            'B' | 'b' | 'X' | 'x' => Some(Cell::Disc(Side::Black)),
            _ => None,
        }
    }
}

/// Status of a position after a move.
///
/// In Reversed Reversi the side with fewer discs wins, so a positive material
/// sum (more White discs) is a win for Black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Ongoing,
    WhiteWins,
    BlackWins,
    Tie,
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("Ongoing"),
            GameStatus::WhiteWins => f.write_str("White wins"),
            GameStatus::BlackWins => f.write_str("Black wins"),
            GameStatus::Tie => f.write_str("Tie"),
        }
    }
}

impl GameStatus {
    /// Result of a finished game with the given material sum.
    #[inline]
    pub fn from_material(material: i32) -> GameStatus {
        match material {
            m if m > 0 => GameStatus::BlackWins,
            m if m < 0 => GameStatus::WhiteWins,
            _ => GameStatus::Tie,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }

    #[inline]
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::WhiteWins => Some(Side::White),
            GameStatus::BlackWins => Some(Side::Black),
            GameStatus::Ongoing | GameStatus::Tie => None,
        }
    }
}
