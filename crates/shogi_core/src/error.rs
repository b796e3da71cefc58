//! Error types for the rules engine.
//!
//! Only recoverable caller mistakes are errors. A broken apply/revert
//! discipline inside the engine panics instead.

use thiserror::Error;

use crate::types::{Color, PieceId, Square};

/// Errors returned to callers of the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShogiError {
    /// The target square is not in the piece's legal move set.
    #[error("illegal move: piece {piece} cannot move to {target}")]
    IllegalMove { piece: PieceId, target: Square },

    /// The target square is not in the held piece's legal drop set.
    #[error("illegal drop: piece {piece} cannot be dropped on {target}")]
    IllegalDrop { piece: PieceId, target: Square },

    /// A move was requested for a piece that is not on the board.
    #[error("piece {piece} is not on the board")]
    NotOnBoard { piece: PieceId },

    /// A drop was requested for a piece that is not in the mover's hand.
    #[error("piece {piece} is not in {color}'s hand")]
    NotInHand { piece: PieceId, color: Color },

    /// The piece does not belong to the side to move.
    #[error("it is {expected}'s turn")]
    WrongTurn { expected: Color },

    /// An engine offered nothing although its side has legal actions.
    #[error("engine chose no action but {color} has legal moves")]
    NoActionChosen { color: Color },

    /// The game has already ended.
    #[error("the game is over")]
    GameOver,

    /// A handle that does not name any piece.
    #[error("unknown piece {piece}")]
    UnknownPiece { piece: PieceId },

    /// Malformed SFEN position string.
    #[error("invalid SFEN: {message}")]
    InvalidSfen { message: String },

    /// Positional value table with the wrong number of entries.
    #[error("value table needs {expected} entries, got {actual}")]
    InvalidValueTable { expected: usize, actual: usize },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, ShogiError>;
