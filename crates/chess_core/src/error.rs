//! Error types shared by the rules layer and the players.

use crate::status::GameStatus;

/// Failures reported by the rules layer. Engines pass these through untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("move `{mv}` rejected: {reason}")]
    InvalidMove { mv: String, reason: String },
}

/// Precondition violations raised at a player's call boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The position handed to a player is already finished.
    #[error("game is already over ({0})")]
    GameOver(GameStatus),

    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u8),

    #[error("no legal moves in position")]
    NoLegalMoves,

    #[error(transparent)]
    Rules(#[from] RulesError),
}

pub type EngineResult<T> = Result<T, EngineError>;
