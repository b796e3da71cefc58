//! Move and drop generation.
//!
//! [`legal_moves`] and [`legal_drops`] produce the raw target sets: movement
//! rules, blocking, drop restrictions and turn order, but no king-safety
//! check. The `safe_*` functions and [`legal_actions`] add that filter by
//! trying each candidate on the board and reverting it.

use std::collections::BTreeSet;

use crate::attacks::attack_set;
use crate::board::{Board, Piece};
use crate::catalog::PieceKind;
use crate::rules::is_check;
use crate::squareset::SquareSet;
use crate::types::{BOARD_SIZE, Color, PieceId, Square};

/// Whether generation should return nothing for the side not to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPolicy {
    /// Only the side to move gets targets.
    Enforce,
    /// Generate for either color ("what if" queries, search, mate detection).
    Ignore,
}

/// One playable action: a board move or a drop from hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Move {
        piece: PieceId,
        to: Square,
        promote: bool,
    },
    Drop {
        piece: PieceId,
        to: Square,
    },
}

impl Action {
    pub fn piece(self) -> PieceId {
        match self {
            Action::Move { piece, .. } | Action::Drop { piece, .. } => piece,
        }
    }

    pub fn to(self) -> Square {
        match self {
            Action::Move { to, .. } | Action::Drop { to, .. } => to,
        }
    }

    pub fn is_drop(self) -> bool {
        matches!(self, Action::Drop { .. })
    }

    pub fn is_promotion(self) -> bool {
        matches!(self, Action::Move { promote: true, .. })
    }
}

/// Rows 0-2 for Black, 6-8 for White.
pub fn promotion_zone(color: Color) -> SquareSet {
    match color {
        Color::Black => SquareSet::rows(0, 2),
        Color::White => SquareSet::rows(BOARD_SIZE - 3, BOARD_SIZE - 1),
    }
}

/// Squares where an unpromoted `kind` of `color` could never move again.
pub fn dead_zone(kind: PieceKind, color: Color) -> SquareSet {
    let n = kind.dead_ranks();
    if n == 0 {
        return SquareSet::EMPTY;
    }
    match color {
        Color::Black => SquareSet::rows(0, n - 1),
        Color::White => SquareSet::rows(BOARD_SIZE - n, BOARD_SIZE - 1),
    }
}

/// Whether `piece` may promote after landing on `to`.
pub fn can_promote(piece: &Piece, to: Square) -> bool {
    piece.kind.can_promote() && !piece.promoted && promotion_zone(piece.color).contains(to)
}

/// Whether `piece` is forced to promote after landing on `to`.
pub fn must_promote(piece: &Piece, to: Square) -> bool {
    !piece.promoted && dead_zone(piece.kind, piece.color).contains(to)
}

/// Reachable squares for the board piece `id`: in bounds, not blocked, not
/// occupied by its own side. Empty if the piece is in hand, or if `policy`
/// enforces turn order and it is not this piece's turn.
///
/// Moves that expose the mover's own king are included; see [`safe_moves`].
pub fn legal_moves(board: &Board, id: PieceId, policy: TurnPolicy) -> SquareSet {
    let piece = board.piece(id);
    if piece.square().is_none() {
        return SquareSet::EMPTY;
    }
    if policy == TurnPolicy::Enforce && piece.color != board.side_to_move() {
        return SquareSet::EMPTY;
    }
    let color = piece.color;
    attack_set(board, id)
        .filter(|&s| board.piece_at(s).is_none_or(|p| p.color != color))
        .collect()
}

/// Empty squares where the held piece `id` may be dropped by the side whose
/// hand holds it.
///
/// Excludes the dead ranks for its kind, files that already hold an
/// unpromoted pawn of the dropping color (nifu), and for pawns the square
/// directly in front of the enemy king (a simplified uchifuzume guard).
pub fn legal_drops(board: &Board, id: PieceId, policy: TurnPolicy) -> SquareSet {
    let Some(owner) = board.hand_owner(id) else {
        return SquareSet::EMPTY;
    };
    if policy == TurnPolicy::Enforce && owner != board.side_to_move() {
        return SquareSet::EMPTY;
    }
    let kind = board.piece(id).kind;
    if kind == PieceKind::King {
        return SquareSet::EMPTY;
    }

    let mut targets: SquareSet = Square::all().filter(|&s| board.at(s).is_none()).collect();
    targets &= !dead_zone(kind, owner);

    if kind == PieceKind::Pawn {
        for pid in board.active_pieces(owner) {
            let p = board.piece(pid);
            if p.kind == PieceKind::Pawn
                && !p.promoted
                && let Some(s) = p.square()
            {
                targets &= !SquareSet::col(s.col());
            }
        }
        if let Some(king_sq) = board.king_square(owner.opposite())
            && let Some(front) = king_sq.offset(-owner.forward(), 0)
        {
            targets.remove(front);
        }
    }
    targets
}

/// [`legal_moves`] minus moves that leave the mover's king attacked.
pub fn safe_moves(board: &mut Board, id: PieceId, policy: TurnPolicy) -> SquareSet {
    let color = board.piece(id).color;
    legal_moves(board, id, policy)
        .filter(|&to| {
            let trial = board.trial(Action::Move {
                piece: id,
                to,
                promote: false,
            });
            !is_check(&trial, color)
        })
        .collect()
}

/// [`legal_drops`] minus drops that leave the dropping side's king attacked.
pub fn safe_drops(board: &mut Board, id: PieceId, policy: TurnPolicy) -> SquareSet {
    let Some(owner) = board.hand_owner(id) else {
        return SquareSet::EMPTY;
    };
    legal_drops(board, id, policy)
        .filter(|&to| {
            let trial = board.trial(Action::Drop { piece: id, to });
            !is_check(&trial, owner)
        })
        .collect()
}

/// Every move and drop for `color`, regardless of whose turn it is and
/// without the king-safety filter.
///
/// Board moves come first in piece order, each followed by its promotion
/// variants (promoted first). Drops follow, one hand piece per kind since
/// demoted pieces of the same kind are interchangeable.
pub fn pseudo_actions(board: &Board, color: Color) -> Vec<Action> {
    let mut out = Vec::with_capacity(128);

    for id in board.active_pieces(color) {
        let piece = board.piece(id);
        for to in legal_moves(board, id, TurnPolicy::Ignore) {
            let forced = must_promote(piece, to);
            if forced || can_promote(piece, to) {
                out.push(Action::Move {
                    piece: id,
                    to,
                    promote: true,
                });
            }
            if !forced {
                out.push(Action::Move {
                    piece: id,
                    to,
                    promote: false,
                });
            }
        }
    }

    let mut seen = BTreeSet::new();
    for id in board.hand_pieces(color) {
        if !seen.insert(board.piece(id).kind) {
            continue;
        }
        for to in legal_drops(board, id, TurnPolicy::Ignore) {
            out.push(Action::Drop { piece: id, to });
        }
    }
    out
}

/// [`pseudo_actions`] that do not leave `color`'s king attacked.
pub fn legal_actions(board: &mut Board, color: Color) -> Vec<Action> {
    pseudo_actions(board, color)
        .into_iter()
        .filter(|&action| {
            let trial = board.trial(action);
            !is_check(&trial, color)
        })
        .collect()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
