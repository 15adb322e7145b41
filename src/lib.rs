//! Codebreaker library - code-breaking puzzle engine and adapters
//!
//! A Mastermind-style game server: players create sessions, submit guesses,
//! and receive `(exact, colorOnly)` feedback until the secret is found or
//! the attempt budget runs out.
//!
//! # Architecture
//!
//! - **Games**: pure scoring and secret generation ([`score_guess`],
//!   [`generate_secret`]) plus the immutable [`GameRules`]
//! - **Registry**: in-memory session store and state machine
//!   ([`GameRegistry`])
//! - **Server**: axum REST adapter over the registry
//! - **Play**: thin stdin adapter for local games
//!
//! # Example
//!
//! ```
//! use codebreaker::{GameRegistry, GameStatus};
//!
//! let registry = GameRegistry::default();
//! let game = registry.create_game("player-1");
//! let outcome = registry.submit_guess(game.id, "player-1", "1234")?;
//! assert!(outcome.remaining_attempts < 10 || outcome.status_after_guess == GameStatus::Won);
//! # Ok::<(), codebreaker::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod games;
mod play;
mod server;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Game logic
pub use games::mastermind::{
    GameRules, GameStatus, GuessRecord, Hint, generate_secret, score_guess,
};

// Crate-level exports - Local play adapter
pub use play::run as play_local;

// Crate-level exports - HTTP adapter
pub use server::{ApiError, AppState, CreateGuessRequest, ErrorBody, HealthResponse, app, run};

// Crate-level exports - Session registry
pub use session::{GameId, GameRegistry, GuessOutcome, SessionView};
