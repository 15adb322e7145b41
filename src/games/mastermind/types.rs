//! Core domain types for the code-breaking game.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Game is ongoing and accepts guesses.
    Active,
    /// The secret was found within the attempt budget.
    Won,
    /// The attempt budget ran out before the secret was found.
    Lost,
}

impl GameStatus {
    /// Returns true once the game no longer accepts guesses.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Feedback for a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    /// Positions where the guess matches the secret exactly.
    pub exact: usize,
    /// Additional right-symbol, wrong-position matches, counted with
    /// multiplicity over the positions that did not match exactly.
    pub color_only: usize,
}

/// One entry in a game's guess history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRecord {
    /// 1-based attempt number, assigned by the registry.
    pub attempt_number: u32,
    /// The submitted guess text.
    pub guess: String,
    /// Feedback for this guess.
    pub hint: Hint,
    /// When the guess was accepted.
    pub created_at: DateTime<Utc>,
}
