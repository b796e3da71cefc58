//! Game and match results, always from the first engine's point of view.

use serde::{Deserialize, Serialize};

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// Conventional score notation.
    pub fn notation(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = f64::from(self.total_games());
        if total == 0.0 {
            return 0.5;
        }
        (f64::from(self.wins) + 0.5 * f64::from(self.draws)) / total
    }
}

/// What gets written to `--output`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    pub games: Vec<GameResult>,
}
