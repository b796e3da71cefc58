//! Static movement and value descriptors for every piece.
//!
//! Step vectors are color-relative: `dr > 0` means "toward the opponent".
//! The board applies them as `row + dr * color.forward()`, so a single
//! descriptor set serves both colors.

use serde::{Deserialize, Serialize};

/// Identity of a piece, independent of promotion.
///
/// A promoted Silver is still a `Silver` with the promoted flag set; this is
/// what it demotes back to when captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Lance,
    Knight,
    Silver,
    Gold,
    Bishop,
    Rook,
    King,
}

/// Effective movement type of a piece as it stands on the board.
///
/// Promoted Pawn, Lance, Knight and Silver all move as `Gold`.
/// The discriminant is the index into the positional value table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn = 0,
    Lance = 1,
    Knight = 2,
    Silver = 3,
    Gold = 4,
    Bishop = 5,
    Rook = 6,
    Dragon = 7,
    Horse = 8,
    King = 9,
}

/// One direction of movement.
///
/// A sliding direction repeats the step until it leaves the board or hits
/// a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub dr: i8,
    pub dc: i8,
    pub slide: bool,
}

const fn step(dr: i8, dc: i8) -> Step {
    Step {
        dr,
        dc,
        slide: false,
    }
}

const fn ray(dr: i8, dc: i8) -> Step {
    Step { dr, dc, slide: true }
}

const PAWN_STEPS: &[Step] = &[step(1, 0)];
const LANCE_STEPS: &[Step] = &[ray(1, 0)];
const KNIGHT_STEPS: &[Step] = &[step(2, 1), step(2, -1)];
const SILVER_STEPS: &[Step] = &[
    step(1, 0),
    step(1, 1),
    step(1, -1),
    step(-1, 1),
    step(-1, -1),
];
const GOLD_STEPS: &[Step] = &[
    step(1, 0),
    step(1, 1),
    step(1, -1),
    step(0, 1),
    step(0, -1),
    step(-1, 0),
];
const BISHOP_STEPS: &[Step] = &[ray(1, 1), ray(1, -1), ray(-1, 1), ray(-1, -1)];
const ROOK_STEPS: &[Step] = &[ray(1, 0), ray(-1, 0), ray(0, 1), ray(0, -1)];
const DRAGON_STEPS: &[Step] = &[
    ray(1, 0),
    ray(-1, 0),
    ray(0, 1),
    ray(0, -1),
    step(1, 1),
    step(1, -1),
    step(-1, 1),
    step(-1, -1),
];
const HORSE_STEPS: &[Step] = &[
    ray(1, 1),
    ray(1, -1),
    ray(-1, 1),
    ray(-1, -1),
    step(1, 0),
    step(-1, 0),
    step(0, 1),
    step(0, -1),
];
const KING_STEPS: &[Step] = &[
    step(1, 0),
    step(1, 1),
    step(1, -1),
    step(0, 1),
    step(0, -1),
    step(-1, 0),
    step(-1, 1),
    step(-1, -1),
];

impl PieceKind {
    pub const ALL: [PieceKind; 8] = [
        PieceKind::Pawn,
        PieceKind::Lance,
        PieceKind::Knight,
        PieceKind::Silver,
        PieceKind::Gold,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::King,
    ];

    /// Whether this kind has a promoted form at all.
    pub fn can_promote(self) -> bool {
        !matches!(self, PieceKind::Gold | PieceKind::King)
    }

    /// Effective type in the given promotion state.
    pub fn piece_type(self, promoted: bool) -> PieceType {
        match (self, promoted && self.can_promote()) {
            (PieceKind::Rook, true) => PieceType::Dragon,
            (PieceKind::Bishop, true) => PieceType::Horse,
            (_, true) => PieceType::Gold,
            (PieceKind::Pawn, false) => PieceType::Pawn,
            (PieceKind::Lance, false) => PieceType::Lance,
            (PieceKind::Knight, false) => PieceType::Knight,
            (PieceKind::Silver, false) => PieceType::Silver,
            (PieceKind::Gold, false) => PieceType::Gold,
            (PieceKind::Bishop, false) => PieceType::Bishop,
            (PieceKind::Rook, false) => PieceType::Rook,
            (PieceKind::King, false) => PieceType::King,
        }
    }

    /// Material value on the board.
    pub fn value(self, promoted: bool) -> f32 {
        match (self, promoted) {
            (PieceKind::Pawn, false) => 1.00,
            (PieceKind::Pawn, true) => 4.20,
            (PieceKind::Lance, false) => 4.30,
            (PieceKind::Lance, true) => 6.30,
            (PieceKind::Knight, false) => 4.50,
            (PieceKind::Knight, true) => 6.40,
            (PieceKind::Silver, false) => 6.40,
            (PieceKind::Silver, true) => 6.70,
            (PieceKind::Gold, _) => 6.90,
            (PieceKind::Bishop, false) => 8.90,
            (PieceKind::Bishop, true) => 11.50,
            (PieceKind::Rook, false) => 10.40,
            (PieceKind::Rook, true) => 13.00,
            (PieceKind::King, _) => 100_000.0,
        }
    }

    /// Material value while held in hand, ready to be dropped.
    pub fn value_in_hand(self) -> f32 {
        match self {
            PieceKind::Pawn => 1.15,
            PieceKind::Lance => 4.80,
            PieceKind::Knight => 5.10,
            PieceKind::Silver => 7.20,
            PieceKind::Gold => 7.80,
            PieceKind::Bishop => 11.10,
            PieceKind::Rook => 12.70,
            PieceKind::King => 100_000.0,
        }
    }

    /// Number of ranks nearest the opponent on which this kind, unpromoted,
    /// would have no legal step left. It may not be dropped there and must
    /// promote when moving there.
    pub fn dead_ranks(self) -> u8 {
        match self {
            PieceKind::Pawn | PieceKind::Lance => 1,
            PieceKind::Knight => 2,
            _ => 0,
        }
    }

    /// How many of this kind exist in a full game, both sides together.
    pub fn total_count(self) -> u32 {
        match self {
            PieceKind::Pawn => 18,
            PieceKind::Lance | PieceKind::Knight | PieceKind::Silver | PieceKind::Gold => 4,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::King => 2,
        }
    }

    /// Single-letter symbol, uppercase.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Lance => 'L',
            PieceKind::Knight => 'N',
            PieceKind::Silver => 'S',
            PieceKind::Gold => 'G',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::King => 'K',
        }
    }

    pub fn from_symbol(c: char) -> Option<PieceKind> {
        let kind = match c.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'L' => PieceKind::Lance,
            'N' => PieceKind::Knight,
            'S' => PieceKind::Silver,
            'G' => PieceKind::Gold,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'K' => PieceKind::King,
            _ => return None,
        };
        Some(kind)
    }
}

impl PieceType {
    pub const COUNT: usize = 10;

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn steps(self) -> &'static [Step] {
        match self {
            PieceType::Pawn => PAWN_STEPS,
            PieceType::Lance => LANCE_STEPS,
            PieceType::Knight => KNIGHT_STEPS,
            PieceType::Silver => SILVER_STEPS,
            PieceType::Gold => GOLD_STEPS,
            PieceType::Bishop => BISHOP_STEPS,
            PieceType::Rook => ROOK_STEPS,
            PieceType::Dragon => DRAGON_STEPS,
            PieceType::Horse => HORSE_STEPS,
            PieceType::King => KING_STEPS,
        }
    }
}
