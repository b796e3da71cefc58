//! Beam search: depth-limited negamax that only expands the `width`
//! best-looking candidates at each ply.
//!
//! Candidates are tried in place on the board through [`Board::trial`], so
//! every exit path of a frame reverts what it applied.

use tracing::debug;

use crate::board::Board;
use crate::eval::{MATE_SCORE, ValueTable, evaluate};
use crate::movegen::{Action, pseudo_actions};
use crate::rules::is_check;
use crate::time_control::SearchLimits;
use crate::types::{Color, PieceId, Square};

/// A scored candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMove {
    pub score: f64,
    pub action: Action,
}

impl BestMove {
    pub fn target(&self) -> Square {
        self.action.to()
    }

    pub fn piece(&self) -> PieceId {
        self.action.piece()
    }

    pub fn is_drop(&self) -> bool {
        self.action.is_drop()
    }

    pub fn is_promotion(&self) -> bool {
        self.action.is_promotion()
    }
}

/// One-ply ranking for `color`: every move and drop scored by
/// [`evaluate`] right after it is applied, best first, at most `width`
/// kept. Actions that leave `color`'s king attacked are dropped. Equal
/// scores keep generation order.
pub fn ranked_moves(
    board: &mut Board,
    color: Color,
    width: usize,
    table: &ValueTable,
) -> Vec<BestMove> {
    let mut scored: Vec<BestMove> = pseudo_actions(board, color)
        .into_iter()
        .filter_map(|action| {
            let trial = board.trial(action);
            if is_check(&trial, color) {
                return None;
            }
            Some(BestMove {
                score: evaluate(&trial, color, table),
                action,
            })
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(width);
    scored
}

/// Counters from one [`best_move`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frames entered, the root included.
    pub nodes: u64,
}

/// Pick an action for `color`. `None` means `color` has nothing playable.
///
/// The board is left exactly as it was found.
pub fn best_move(
    board: &mut Board,
    color: Color,
    limits: SearchLimits,
    table: &ValueTable,
) -> (Option<BestMove>, SearchStats) {
    let mut stats = SearchStats::default();
    let best = search(
        board,
        color,
        limits.depth.max(1),
        limits.width.max(1),
        table,
        &mut stats,
    );
    debug!(
        %color,
        depth = limits.depth,
        width = limits.width,
        nodes = stats.nodes,
        score = ?best.map(|b| b.score),
        "beam search finished"
    );
    (best, stats)
}

fn search(
    board: &mut Board,
    color: Color,
    depth: u8,
    width: usize,
    table: &ValueTable,
    stats: &mut SearchStats,
) -> Option<BestMove> {
    stats.nodes += 1;
    let candidates = ranked_moves(board, color, width, table);
    if depth <= 1 {
        return candidates.first().copied();
    }

    let mut best: Option<BestMove> = None;
    for cand in candidates {
        let score = {
            let mut trial = board.trial(cand.action);
            match search(&mut trial, color.opposite(), depth - 1, width, table, stats) {
                Some(reply) => -reply.score,
                // The opponent has no answer at all.
                None => MATE_SCORE,
            }
        };
        if best.is_none_or(|b| score > b.score) {
            best = Some(BestMove {
                score,
                action: cand.action,
            });
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
