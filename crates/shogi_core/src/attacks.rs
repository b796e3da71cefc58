//! Attack detection and line-of-sight resolution.
//!
//! Everything here works directly off the movement descriptors in
//! [`crate::catalog`]; there are no precomputed tables. Blocking treats
//! every occupant alike, including the defending king.

use crate::board::Board;
use crate::catalog::Step;
use crate::squareset::SquareSet;
use crate::types::{Color, PieceId, Square};

/// A descriptor step turned into an absolute board delta for `color`.
#[inline]
pub(crate) fn oriented(step: Step, color: Color) -> (i8, i8) {
    let f = color.forward();
    (step.dr * f, step.dc * f)
}

/// Interior squares strictly between `a` and `b` on a shared row, column or
/// diagonal. Empty when the squares are not aligned or are adjacent.
pub fn path_between(a: Square, b: Square) -> SquareSet {
    let dr = b.row() as i8 - a.row() as i8;
    let dc = b.col() as i8 - a.col() as i8;
    if (dr == 0 && dc == 0) || !(dr == 0 || dc == 0 || dr.abs() == dc.abs()) {
        return SquareSet::EMPTY;
    }
    let (ur, uc) = (dr.signum(), dc.signum());
    let mut path = SquareSet::EMPTY;
    let mut cur = a.offset(ur, uc);
    while let Some(s) = cur {
        if s == b {
            break;
        }
        path.insert(s);
        cur = s.offset(ur, uc);
    }
    path
}

/// True if any interior square between `a` and `b` is occupied.
pub fn is_blocked(board: &Board, a: Square, b: Square) -> bool {
    path_between(a, b).any(|s| board.at(s).is_some())
}

/// Does the piece `id`, from its current square, attack `target`?
///
/// Pieces in hand attack nothing.
pub fn attacks_square(board: &Board, id: PieceId, target: Square) -> bool {
    let piece = board.piece(id);
    let Some(from) = piece.square() else {
        return false;
    };
    if from == target {
        return false;
    }
    let dr = target.row() as i8 - from.row() as i8;
    let dc = target.col() as i8 - from.col() as i8;

    piece.steps().iter().any(|&step| {
        let (sr, sc) = oriented(step, piece.color);
        if !step.slide {
            return sr == dr && sc == dc;
        }
        // Target must lie k >= 1 steps along the ray.
        let k = if sr != 0 { dr / sr } else { dc / sc };
        k >= 1 && sr * k == dr && sc * k == dc && !is_blocked(board, from, target)
    })
}

/// Every square the piece `id` attacks, including squares held by its own
/// side. Sliding rays stop on (and include) the first occupied square.
pub fn attack_set(board: &Board, id: PieceId) -> SquareSet {
    let piece = board.piece(id);
    let Some(from) = piece.square() else {
        return SquareSet::EMPTY;
    };
    let mut out = SquareSet::EMPTY;
    for &step in piece.steps() {
        let (sr, sc) = oriented(step, piece.color);
        let mut cur = from.offset(sr, sc);
        while let Some(s) = cur {
            out.insert(s);
            if !step.slide || board.at(s).is_some() {
                break;
            }
            cur = s.offset(sr, sc);
        }
    }
    out
}

/// Active pieces of `by` that attack `target`. Empty when none do.
pub fn attacked(board: &Board, target: Square, by: Color) -> Vec<PieceId> {
    board
        .active_pieces(by)
        .filter(|&id| attacks_square(board, id, target))
        .collect()
}

/// Cheaper form of [`attacked`] that stops at the first attacker.
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .active_pieces(by)
        .any(|id| attacks_square(board, id, target))
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
