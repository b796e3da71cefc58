//! Bitboard over the 81 squares of the shogi board.
//!
//! A `SquareSet` is a 128-bit integer where bit `row * 9 + col` represents a
//! square. Bits 81..128 are always zero. Move and drop generation return
//! these so callers can highlight targets or test membership cheaply.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::types::{BOARD_SIZE, Square};

const BOARD_MASK: u128 = (1u128 << 81) - 1;

/// A set of squares on the shogi board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u128);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);
    pub const ALL: SquareSet = SquareSet(BOARD_MASK);

    /// All squares of one row.
    pub const fn row(row: u8) -> SquareSet {
        SquareSet(0x1FFu128 << (row as u32 * BOARD_SIZE as u32))
    }

    /// All squares of one column.
    pub const fn col(col: u8) -> SquareSet {
        let mut bits = 0u128;
        let mut r = 0;
        while r < BOARD_SIZE {
            bits |= 1u128 << (r as u32 * BOARD_SIZE as u32 + col as u32);
            r += 1;
        }
        SquareSet(bits)
    }

    /// Rows `from..=to`, inclusive.
    pub const fn rows(from: u8, to: u8) -> SquareSet {
        let mut bits = 0u128;
        let mut r = from;
        while r <= to {
            bits |= SquareSet::row(r).0;
            r += 1;
        }
        SquareSet(bits)
    }

    #[inline(always)]
    pub fn from_square(sq: Square) -> Self {
        SquareSet(1u128 << sq.index())
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        (self.0 & (1u128 << sq.index())) != 0
    }

    #[inline(always)]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u128 << sq.index();
    }

    #[inline(always)]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1u128 << sq.index());
    }

    /// Number of squares in the set.
    #[inline(always)]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Remove and return the lowest-index square.
    #[inline(always)]
    pub fn pop_first(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let idx = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Square::from_index(idx)
        }
    }

    pub fn iter(self) -> SquareSet {
        self
    }
}

impl BitAnd for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for SquareSet {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self::Output {
        SquareSet(!self.0 & BOARD_MASK)
    }
}

/// Iterates squares in ascending index order (row-major).
impl Iterator for SquareSet {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_first()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

#[cfg(test)]
#[path = "squareset_tests.rs"]
mod squareset_tests;
