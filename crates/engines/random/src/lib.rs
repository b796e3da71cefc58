//! Random Move Shogi Engine
//!
//! A simple engine that selects uniformly at random among all legal moves
//! and drops. Useful for:
//! - Baseline comparisons (the beam engine should easily beat this)
//! - Stress testing move and drop generation over long games

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use shogi_core::{Board, Engine, SearchLimits, SearchResult, legal_actions};


/// A shogi engine that plays random legal actions.
///
/// No evaluation at all; it only needs the board to enumerate what is
/// playable for the side to move.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible move choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &mut Board, _limits: SearchLimits) -> SearchResult {
        let color = board.side_to_move();
        let actions = legal_actions(board, color);

        self.nodes = 1;

        let best_move = actions.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
