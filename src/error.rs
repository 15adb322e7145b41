//! Game error types.

use derive_more::{Display, Error};

/// Recoverable conditions surfaced to adapter layers.
///
/// Every variant is a caller-input or caller-state problem with no retry
/// semantics. The display text is the message shown to clients; [`code`]
/// gives the stable machine-readable kind.
///
/// [`code`]: GameError::code
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// No session with that id belongs to the caller. Deliberately covers
    /// both true absence and ownership mismatch so that other owners'
    /// sessions are indistinguishable from nonexistent ones.
    #[display("Game not found.")]
    NotFound,
    /// Guess text failed the length/alphabet check.
    #[display("Guess must match pattern {pattern}.")]
    InvalidGuess {
        /// The accepted guess shape, e.g. `^[1-6]{4}$`.
        pattern: String,
    },
    /// Guess submitted against a session already in a terminal state.
    #[display("Game is already finished.")]
    GameFinished,
    /// Caller identification was required but missing.
    #[display("Missing or invalid credentials.")]
    Unauthorized,
}

impl GameError {
    /// Stable wire code for this condition kind.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::NotFound => "not_found",
            GameError::InvalidGuess { .. } => "invalid_guess",
            GameError::GameFinished => "game_finished",
            GameError::Unauthorized => "unauthorized",
        }
    }
}
