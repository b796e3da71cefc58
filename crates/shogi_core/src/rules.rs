//! Check and checkmate detection.

use std::collections::BTreeSet;

use crate::attacks::{attacked, is_attacked, path_between};
use crate::board::Board;
use crate::movegen::{Action, TurnPolicy, legal_drops, legal_moves};
use crate::squareset::SquareSet;
use crate::types::{Color, PieceId};

/// Is `color`'s king attacked? A king that is no longer on the board counts
/// as in check.
pub fn is_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(ks) => is_attacked(board, ks, color.opposite()),
        None => true,
    }
}

/// Has `color` lost?
///
/// True if the king was captured. Otherwise false unless the king is under
/// attack, in which case the king tries every step, and, against a single
/// attacker, every other piece tries to capture it or interpose. Two
/// attackers at once can only be escaped by moving the king.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    if board.king_captured(color) {
        return true;
    }
    let (Some(king), Some(ks)) = (board.king(color), board.king_square(color)) else {
        return true;
    };
    let attackers = attacked(board, ks, color.opposite());
    if attackers.is_empty() {
        return false;
    }

    for to in legal_moves(board, king, TurnPolicy::Ignore) {
        if resolves(board, Action::Move { piece: king, to, promote: false }, color) {
            return false;
        }
    }

    if let &[attacker] = attackers.as_slice() {
        let Some(asq) = board.piece(attacker).square() else {
            return true;
        };
        let line = path_between(ks, asq);
        let answer = line | SquareSet::from_square(asq);

        let defenders: Vec<PieceId> = board
            .active_pieces(color)
            .filter(|&id| id != king)
            .collect();
        for id in defenders {
            for to in legal_moves(board, id, TurnPolicy::Ignore) & answer {
                if resolves(board, Action::Move { piece: id, to, promote: false }, color) {
                    return false;
                }
            }
        }

        let mut seen = BTreeSet::new();
        let held: Vec<PieceId> = board.hand_pieces(color).collect();
        for id in held {
            if !seen.insert(board.piece(id).kind) {
                continue;
            }
            for to in legal_drops(board, id, TurnPolicy::Ignore) & line {
                if resolves(board, Action::Drop { piece: id, to }, color) {
                    return false;
                }
            }
        }
    }
    true
}

fn resolves(board: &mut Board, action: Action, color: Color) -> bool {
    let trial = board.trial(action);
    !is_check(&trial, color)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
