//! Turn-by-turn driver for a single game.
//!
//! [`Game`] is the surface a front end talks to: it validates requests
//! against the king-safe move sets, applies them, hands the clock over and
//! reports what happened. It never ends play on its own; terminal states
//! are reported through [`GameStatus`].

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::Board;
use crate::error::{Result, ShogiError};
use crate::movegen::{
    Action, TurnPolicy, can_promote, legal_actions, must_promote, safe_drops, safe_moves,
};
use crate::mutation::Undo;
use crate::rules::{is_check, is_checkmate};
use crate::squareset::SquareSet;
use crate::time_control::{GameClock, SearchLimits};
use crate::types::{Color, PieceId, Square};
use crate::Engine;

/// Who moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Black,
    White,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    PlayerVsPlayer,
    /// The human plays Black and always starts; the engine plays White.
    PlayerVsEngine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayer,
    /// Clock budget per side, in seconds.
    pub max_time_secs: u64,
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::Black,
            max_time_secs: 300,
            mode: GameMode::PlayerVsPlayer,
        }
    }
}

impl GameConfig {
    /// Resolve the starting color, drawing a coin for `Random`.
    pub fn starting_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        if self.mode == GameMode::PlayerVsEngine {
            return Color::Black;
        }
        match self.first_player {
            FirstPlayer::Black => Color::Black,
            FirstPlayer::White => Color::White,
            FirstPlayer::Random => {
                if rng.gen_bool(0.5) {
                    Color::Black
                } else {
                    Color::White
                }
            }
        }
    }

    /// The color the engine plays, if any.
    pub fn engine_color(&self) -> Option<Color> {
        match self.mode {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsEngine => Some(Color::White),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    TimeExpired { loser: Color },
    /// The side to move has no legal action and is not in check.
    NoLegalMoves { side: Color },
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// What one accepted move or drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The action as applied, promotion flag resolved.
    pub action: Action,
    pub mover: Color,
    /// Piece taken off the board, if any.
    pub captured: Option<PieceId>,
    pub promoted: bool,
    /// The opponent is now in check.
    pub check: bool,
    pub checkmate: bool,
    pub status: GameStatus,
}

pub struct Game {
    board: Board,
    clock: GameClock,
    config: GameConfig,
    status: GameStatus,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let mut board = Board::new();
        board.set_side_to_move(config.starting_color(rng));
        Self::from_board(board, config)
    }

    /// Continue from an arbitrary position. The clock is not started.
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        let clock = GameClock::new(Duration::from_secs(config.max_time_secs));
        Self {
            board,
            clock,
            config,
            status: GameStatus::Ongoing,
        }
    }

    /// Start the side to move's timer.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.clock
            .switch_to_at(Some(self.board.side_to_move()), now);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Squares `piece` may go to this turn, for highlighting. Empty for the
    /// side not to move.
    pub fn legal_targets(&mut self, piece: PieceId) -> Result<SquareSet> {
        let p = self
            .board
            .get(piece)
            .ok_or(ShogiError::UnknownPiece { piece })?;
        if p.square().is_some() {
            Ok(safe_moves(&mut self.board, piece, TurnPolicy::Enforce))
        } else {
            Ok(safe_drops(&mut self.board, piece, TurnPolicy::Enforce))
        }
    }

    /// Move a board piece. `promote` is honored when the destination allows
    /// it and forced where the piece could not move again otherwise.
    ///
    /// A request made after the mover's clock ran out records the flag fall
    /// and fails with [`ShogiError::GameOver`]; the board is not touched.
    pub fn request_move(
        &mut self,
        piece: PieceId,
        target: Square,
        promote: bool,
    ) -> Result<TurnReport> {
        self.request_move_at(piece, target, promote, Instant::now())
    }

    pub fn request_move_at(
        &mut self,
        piece: PieceId,
        target: Square,
        promote: bool,
        now: Instant,
    ) -> Result<TurnReport> {
        self.check_time_at(now);
        self.ensure_ongoing()?;
        let p = self
            .board
            .get(piece)
            .ok_or(ShogiError::UnknownPiece { piece })?;
        if p.square().is_none() {
            return Err(self.reject(ShogiError::NotOnBoard { piece }));
        }
        let expected = self.board.side_to_move();
        if p.color != expected {
            return Err(self.reject(ShogiError::WrongTurn { expected }));
        }
        if !safe_moves(&mut self.board, piece, TurnPolicy::Enforce).contains(target) {
            return Err(self.reject(ShogiError::IllegalMove { piece, target }));
        }

        let p = self.board.piece(piece);
        let promote = must_promote(p, target) || (promote && can_promote(p, target));
        Ok(self.commit(
            Action::Move {
                piece,
                to: target,
                promote,
            },
            now,
        ))
    }

    /// Drop a piece from the mover's hand.
    pub fn request_drop(&mut self, piece: PieceId, target: Square) -> Result<TurnReport> {
        self.request_drop_at(piece, target, Instant::now())
    }

    pub fn request_drop_at(
        &mut self,
        piece: PieceId,
        target: Square,
        now: Instant,
    ) -> Result<TurnReport> {
        self.check_time_at(now);
        self.ensure_ongoing()?;
        if self.board.get(piece).is_none() {
            return Err(ShogiError::UnknownPiece { piece });
        }
        let color = self.board.side_to_move();
        if !self.board.in_hand(piece, color) {
            return Err(self.reject(ShogiError::NotInHand { piece, color }));
        }
        if !safe_drops(&mut self.board, piece, TurnPolicy::Enforce).contains(target) {
            return Err(self.reject(ShogiError::IllegalDrop { piece, target }));
        }
        Ok(self.commit(Action::Drop { piece, to: target }, now))
    }

    /// Validate and play any action.
    pub fn play(&mut self, action: Action) -> Result<TurnReport> {
        self.play_at(action, Instant::now())
    }

    pub fn play_at(&mut self, action: Action, now: Instant) -> Result<TurnReport> {
        match action {
            Action::Move { piece, to, promote } => self.request_move_at(piece, to, promote, now),
            Action::Drop { piece, to } => self.request_drop_at(piece, to, now),
        }
    }

    /// Let `engine` choose and play for the side to move.
    ///
    /// Returns `Ok(None)` when the side to move really has nothing to play;
    /// the status then records checkmate or [`GameStatus::NoLegalMoves`].
    /// An engine that gives up while legal actions remain gets
    /// [`ShogiError::NoActionChosen`] and the game is left as it was.
    pub fn play_engine_turn(
        &mut self,
        engine: &mut dyn Engine,
        limits: SearchLimits,
    ) -> Result<Option<TurnReport>> {
        self.ensure_ongoing()?;
        let color = self.board.side_to_move();
        let result = engine.search(&mut self.board, limits);
        match result.best_move {
            Some(action) => self.play(action).map(Some),
            None => {
                if !legal_actions(&mut self.board, color).is_empty() {
                    return Err(self.reject(ShogiError::NoActionChosen { color }));
                }
                self.status = if is_check(&self.board, color) {
                    GameStatus::Checkmate {
                        winner: color.opposite(),
                    }
                } else {
                    GameStatus::NoLegalMoves { side: color }
                };
                info!(engine = engine.name(), %color, status = ?self.status, "no legal action");
                Ok(None)
            }
        }
    }

    /// Record a flag fall for the side to move, if it has happened.
    pub fn check_time(&mut self) -> GameStatus {
        self.check_time_at(Instant::now())
    }

    pub fn check_time_at(&mut self, now: Instant) -> GameStatus {
        let color = self.board.side_to_move();
        if self.status == GameStatus::Ongoing && self.clock.is_expired_at(color, now) {
            self.status = GameStatus::TimeExpired { loser: color };
            self.clock.switch_to_at(None, now);
            info!(%color, "time expired");
        }
        self.status
    }

    fn ensure_ongoing(&self) -> Result<()> {
        if self.status.is_over() {
            return Err(ShogiError::GameOver);
        }
        Ok(())
    }

    fn reject(&self, err: ShogiError) -> ShogiError {
        warn!(error = %err, "request rejected");
        err
    }

    fn commit(&mut self, action: Action, now: Instant) -> TurnReport {
        let mover = self.board.side_to_move();
        let undo = self.board.apply(action);
        let (captured, promoted) = match undo {
            Undo::Move { mv, promoted } => (mv.captured.map(|c| c.piece), promoted),
            Undo::Drop(_) => (None, false),
        };
        self.board.end_turn();

        let opponent = mover.opposite();
        self.clock.switch_to_at(Some(opponent), now);

        let check = is_check(&self.board, opponent);
        let stuck = legal_actions(&mut self.board, opponent).is_empty();
        let checkmate = check && (stuck || is_checkmate(&mut self.board, opponent));

        if let Some(victim) = captured {
            info!(%mover, piece = %victim, kind = ?self.board.piece(victim).kind, "capture");
        }
        if promoted {
            info!(%mover, piece = %action.piece(), "promotion");
        }
        if checkmate {
            self.status = GameStatus::Checkmate { winner: mover };
            self.clock.switch_to_at(None, now);
            info!(winner = %mover, ply = self.board.ply(), "checkmate");
        } else if stuck {
            self.status = GameStatus::NoLegalMoves { side: opponent };
            self.clock.switch_to_at(None, now);
            info!(side = %opponent, ply = self.board.ply(), "no legal action");
        } else if check {
            info!(side = %opponent, "check");
        }

        TurnReport {
            action,
            mover,
            captured,
            promoted,
            check,
            checkmate,
            status: self.status,
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
