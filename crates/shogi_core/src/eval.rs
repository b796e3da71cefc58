//! Static evaluation: material plus a positional table lookup.

use rand::Rng;

use crate::attacks::is_attacked;
use crate::board::Board;
use crate::catalog::PieceType;
use crate::error::{Result, ShogiError};
use crate::types::{BOARD_SIZE, Color, Square};

/// Score of a lost position. Larger than any reachable material sum.
pub const MATE_SCORE: f64 = 1.0e9;

const SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Positional bonus per `(piece type, row, col)`.
///
/// Stored in Black's frame. White looks up the point-mirrored square
/// `(8 - row, 8 - col)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable {
    values: Vec<f32>,
}

impl ValueTable {
    /// Number of entries: 10 piece types times 81 squares.
    pub const LEN: usize = PieceType::COUNT * SQUARES;

    /// All-zero table: evaluation degenerates to material only.
    pub fn zeros() -> Self {
        Self {
            values: vec![0.0; Self::LEN],
        }
    }

    /// Uniform random entries in `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            values: (0..Self::LEN).map(|_| rng.r#gen::<f32>()).collect(),
        }
    }

    /// Flat entries in `[type][row][col]` order.
    pub fn from_values(values: Vec<f32>) -> Result<Self> {
        if values.len() != Self::LEN {
            return Err(ShogiError::InvalidValueTable {
                expected: Self::LEN,
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Raw entry in Black's frame.
    #[inline]
    pub fn get(&self, ty: PieceType, square: Square) -> f32 {
        self.values[ty.idx() * SQUARES + square.index() as usize]
    }

    /// Entry as seen by `color`.
    #[inline]
    pub fn lookup(&self, ty: PieceType, color: Color, square: Square) -> f32 {
        match color {
            Color::Black => self.get(ty, square),
            Color::White => self.get(ty, square.mirrored()),
        }
    }
}

impl Default for ValueTable {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Material and position of one side: board pieces at their board value
/// plus their table entry, held pieces at their drop value.
pub fn side_score(board: &Board, color: Color, table: &ValueTable) -> f64 {
    let on_board: f64 = board
        .active_pieces(color)
        .map(|id| {
            let p = board.piece(id);
            let positional = p
                .square()
                .map_or(0.0, |s| table.lookup(p.piece_type(), color, s));
            f64::from(p.value()) + f64::from(positional)
        })
        .sum();
    let held: f64 = board
        .hand_pieces(color)
        .map(|id| f64::from(board.piece(id).kind.value_in_hand()))
        .sum();
    on_board + held
}

/// Score from `color`'s point of view. `-MATE_SCORE` if its king is
/// attacked or gone.
pub fn evaluate(board: &Board, color: Color, table: &ValueTable) -> f64 {
    match board.king_square(color) {
        Some(ks) if !is_attacked(board, ks, color.opposite()) => {}
        _ => return -MATE_SCORE,
    }
    side_score(board, color, table) - side_score(board, color.opposite(), table)
}
