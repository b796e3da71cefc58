//! Beam Search Shogi Engine
//!
//! Width-pruned, depth-limited negamax over the core rules engine, scored
//! by material plus a positional value table. This is the computer
//! opponent for player-vs-engine games and the reference side in matches.

pub mod table;

use std::path::Path;

use rand::Rng;
use shogi_core::{
    Board, Engine, MATE_SCORE, SearchLimits, SearchResult, ValueTable, best_move,
};

/// Beam search engine.
///
/// This engine uses:
/// - One-ply ranking of every move and drop, keeping the best `width`
/// - Negamax over the kept candidates down to `depth`
/// - Material plus a `(piece type, row, col)` value table
#[derive(Debug, Clone, Default)]
pub struct BeamEngine {
    table: ValueTable,
    /// Node counter for statistics
    nodes: u64,
}

impl BeamEngine {
    pub fn new(table: ValueTable) -> Self {
        Self { table, nodes: 0 }
    }

    /// Engine with a freshly randomized table, used when no table file is
    /// available.
    pub fn with_random_table<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(ValueTable::random(rng))
    }

    /// Engine with a table loaded from `path` (text or JSON).
    pub fn from_file(path: &Path) -> table::Result<Self> {
        Ok(Self::new(table::load(path)?))
    }

    pub fn table(&self) -> &ValueTable {
        &self.table
    }
}

impl Engine for BeamEngine {
    fn search(&mut self, board: &mut Board, limits: SearchLimits) -> SearchResult {
        let color = board.side_to_move();
        let (best, stats) = best_move(board, color, limits, &self.table);
        self.nodes = stats.nodes;

        SearchResult {
            best_move: best.map(|b| b.action),
            score: best.map_or(-MATE_SCORE, |b| b.score),
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Beam v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shogi_core::{Color, legal_actions, sq};

    #[test]
    fn beam_engine_returns_legal_action_and_restores_board() {
        let mut engine = BeamEngine::default();
        let mut board = Board::new();
        let before = board.clone();

        let result = engine.search(&mut board, SearchLimits::new(2, 3));

        assert_eq!(board, before);
        let action = result.best_move.unwrap();
        assert!(legal_actions(&mut board, Color::Black).contains(&action));
        assert!(result.nodes > 1);
    }

    #[test]
    fn beam_engine_takes_free_rook() {
        let mut engine = BeamEngine::default();
        let mut board = Board::from_sfen("4k4/9/9/9/2r6/9/9/2R6/4K4 b - 1").unwrap();

        let action = engine
            .search(&mut board, SearchLimits::new(1, 5))
            .best_move
            .unwrap();

        assert_eq!(action.to(), sq(4, 2));
    }

    #[test]
    fn beam_engine_reports_no_move_when_mated() {
        let mut engine = BeamEngine::default();
        let mut board = Board::from_sfen("3lkl3/3p1p3/9/9/4R4/9/9/9/K8 w - 1").unwrap();

        let result = engine.search(&mut board, SearchLimits::default());

        assert!(result.best_move.is_none());
        assert_eq!(result.score, -MATE_SCORE);
    }
}
