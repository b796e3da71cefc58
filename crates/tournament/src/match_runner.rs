//! Match runner for playing games between engines

use shogi_core::{Board, Color, Engine, Game, GameStatus};
use tracing::{info, warn};

use crate::config::MatchConfig;
use crate::outcome::{GameResult, MatchResult};

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        self.run_match_with_log(engine1, engine2).0
    }

    /// Like [`run_match`](Self::run_match), also returning each game's
    /// result in order.
    pub fn run_match_with_log(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> (MatchResult, Vec<GameResult>) {
        let mut result = MatchResult::new();
        let mut log = Vec::with_capacity(self.config.games as usize);

        for game_num in 0..self.config.games {
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_black {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flip()
            };

            result.record(game_result);
            log.push(game_result);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.games,
                    outcome = game_result.notation(),
                    engine1_color = if engine1_black { "B" } else { "W" },
                    wins = result.wins,
                    losses = result.losses,
                    draws = result.draws,
                    "game finished"
                );
            }
        }

        (result, log)
    }

    /// Play a single game, returns result from Black's perspective
    pub fn play_game(&self, black: &mut dyn Engine, white: &mut dyn Engine) -> GameResult {
        let mut game = Game::from_board(Board::new(), self.config.game_config());
        let limits = self.config.search_limits();
        black.new_game();
        white.new_game();
        game.start();

        for _ in 0..self.config.max_plies {
            let mover = game.side_to_move();
            let engine: &mut dyn Engine = match mover {
                Color::Black => &mut *black,
                Color::White => &mut *white,
            };

            if let Err(err) = game.play_engine_turn(engine, limits)
                && !game.status().is_over()
            {
                // An illegal action, or none while moves exist, forfeits.
                warn!(engine = engine.name(), %mover, error = %err, "forfeit");
                return from_black(mover.opposite());
            }

            match game.status() {
                GameStatus::Ongoing => {}
                GameStatus::Checkmate { winner } => return from_black(winner),
                GameStatus::TimeExpired { loser } | GameStatus::NoLegalMoves { side: loser } => {
                    return from_black(loser.opposite());
                }
            }
        }

        info!(plies = self.config.max_plies, "ply limit reached, draw");
        GameResult::Draw
    }
}

fn from_black(winner: Color) -> GameResult {
    match winner {
        Color::Black => GameResult::Win,
        Color::White => GameResult::Loss,
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        games,
        depth,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
