pub mod attacks;
pub mod board;
pub mod catalog;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod mutation;
pub mod perft;
pub mod rules;
pub mod search;
pub mod squareset;
pub mod time_control;
pub mod types;

// Re-export the rules engine (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use catalog::*;
pub use error::{Result, ShogiError};
pub use eval::{MATE_SCORE, ValueTable, evaluate};
pub use game::*;
pub use movegen::*;
pub use mutation::*;
pub use perft::perft;
pub use rules::*;
pub use search::{BestMove, SearchStats, best_move, ranked_moves};
pub use squareset::SquareSet;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every computer player (beam, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen action (None if the side to move has nothing playable)
    pub best_move: Option<Action>,
    /// Evaluation from the engine's perspective
    pub score: f64,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all shogi engines must implement.
pub trait Engine: Send {
    /// Choose an action for the side to move on `board`.
    ///
    /// The board may be used as scratch space but must be handed back
    /// exactly as it was received.
    fn search(&mut self, board: &mut Board, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for logs and match reports
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "shogi-beam"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
