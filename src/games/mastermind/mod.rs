//! Code-breaking (Mastermind) game logic.
//!
//! The pieces here are deliberately small and pure: [`GameRules`] holds the
//! immutable game configuration, [`score_guess`] compares a guess against a
//! secret, and [`generate_secret`] draws a fresh secret code. Session state
//! and rule enforcement live in the registry, not here.

mod rules;
mod scorer;
mod secret;
mod types;

pub use rules::GameRules;
pub use scorer::score_guess;
pub use secret::generate_secret;
pub use types::{GameStatus, GuessRecord, Hint};
