use serde::{Deserialize, Serialize};
use std::fmt;

/// Board edge length. The grid is `BOARD_SIZE x BOARD_SIZE`.
pub const BOARD_SIZE: u8 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Row delta of one step "forward" for this color.
    /// Black advances toward row 0, White toward row 8.
    pub fn forward(self) -> i8 {
        match self {
            Color::Black => -1,
            Color::White => 1,
        }
    }

    /// Home rank of the king for this color.
    pub fn home_row(self) -> u8 {
        match self {
            Color::Black => BOARD_SIZE - 1,
            Color::White => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A square on the 9x9 grid, `row` and `col` both in `0..9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    pub fn from_index(idx: u8) -> Option<Square> {
        Square::new(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Linear index `row * 9 + col`, in `0..81`.
    pub fn index(self) -> u8 {
        self.row * BOARD_SIZE + self.col
    }

    /// The square `(row + dr, col + dc)`, or `None` off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&r) && (0..BOARD_SIZE as i8).contains(&c) {
            Some(Square {
                row: r as u8,
                col: c as u8,
            })
        } else {
            None
        }
    }

    /// Point reflection through the centre square: `(8 - row, 8 - col)`.
    pub fn mirrored(self) -> Square {
        Square {
            row: BOARD_SIZE - 1 - self.row,
            col: BOARD_SIZE - 1 - self.col,
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Shorthand used by tests and setup code. Panics on an off-board square.
pub fn sq(row: u8, col: u8) -> Square {
    match Square::new(row, col) {
        Some(s) => s,
        None => panic!("square ({row}, {col}) is off the board"),
    }
}

/// Stable handle of a piece in the board's arena.
///
/// Pieces are created once during setup and live for the whole game, so a
/// `PieceId` stays valid while the piece moves between the grid and a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
