//! Game sessions and the in-memory registry that owns them.

use crate::error::GameError;
use crate::games::mastermind::{
    GameRules, GameStatus, GuessRecord, Hint, generate_secret, score_guess,
};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type GameId = u64;

/// A single game session, including the private fields that never leave the
/// registry: the secret code and the owner it belongs to.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// Session id.
    id: GameId,
    /// Opaque owner identifier supplied at creation.
    owner_id: String,
    /// The hidden code. Immutable for the session's lifetime.
    secret: String,
    /// Current status.
    status: GameStatus,
    /// Number of accepted guesses.
    attempts_used: u32,
    /// Append-only guess history.
    guesses: Vec<GuessRecord>,
    /// Creation time.
    created_at: DateTime<Utc>,
    /// Last modification time.
    updated_at: DateTime<Utc>,
}

impl GameSession {
    fn new(id: GameId, owner_id: String, secret: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            secret,
            status: GameStatus::Active,
            attempts_used: 0,
            guesses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Projects the public view, recomputed on every read so that the
    /// revealed code tracks the current status. The secret is attached only
    /// once the game is lost.
    fn view(&self, rules: &GameRules) -> SessionView {
        let revealed_code = match self.status {
            GameStatus::Lost => Some(self.secret.clone()),
            GameStatus::Active | GameStatus::Won => None,
        };
        SessionView {
            id: self.id,
            status: self.status,
            code_length: rules.code_length(),
            symbols: rules.symbol_strings(),
            max_attempts: rules.max_attempts(),
            attempts_used: self.attempts_used,
            guesses: self.guesses.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            revealed_code,
        }
    }
}

/// Public projection of a session, safe to hand to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Session id.
    pub id: GameId,
    /// Current status.
    pub status: GameStatus,
    /// Number of symbols in a code.
    pub code_length: usize,
    /// The symbol alphabet.
    pub symbols: Vec<String>,
    /// Attempt budget.
    pub max_attempts: u32,
    /// Number of accepted guesses so far.
    pub attempts_used: u32,
    /// Ordered guess history.
    pub guesses: Vec<GuessRecord>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
    /// The secret code, present only once the game is lost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revealed_code: Option<String>,
}

/// Result of an accepted guess submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessOutcome {
    /// The session the guess was applied to.
    pub game_id: GameId,
    /// 1-based attempt number assigned to this guess.
    pub attempt_number: u32,
    /// The submitted guess text.
    pub guess: String,
    /// Feedback for the guess.
    pub hint: Hint,
    /// Session status after applying the guess.
    pub status_after_guess: GameStatus,
    /// Guesses left before a forced loss.
    pub remaining_attempts: u32,
}

/// State shared behind the registry lock.
///
/// The id counter and the secret RNG sit next to the session map so that id
/// assignment and secret generation serialize with every other operation.
#[derive(Debug)]
struct RegistryInner {
    games: HashMap<GameId, GameSession>,
    next_id: GameId,
    rng: StdRng,
}

/// Owns all game sessions for the process.
///
/// Sessions are partitioned by an opaque owner id: every read and mutation
/// is scoped to sessions whose owner matches the caller, and a session owned
/// by someone else behaves exactly like one that never existed.
///
/// Each operation runs as one synchronous critical section, so two
/// concurrent guesses against the same session can never race on attempt
/// numbers or status resolution.
#[derive(Debug, Clone)]
pub struct GameRegistry {
    rules: GameRules,
    inner: Arc<Mutex<RegistryInner>>,
}

impl GameRegistry {
    /// Creates a registry with an entropy-seeded secret generator.
    #[instrument(skip(rules))]
    pub fn new(rules: GameRules) -> Self {
        info!(
            code_length = rules.code_length(),
            max_attempts = rules.max_attempts(),
            "Creating game registry"
        );
        Self::with_rng(rules, StdRng::from_entropy())
    }

    /// Creates a registry with a caller-supplied generator. Seeded
    /// generators make secrets reproducible, so reserve this for tests.
    pub fn with_rng(rules: GameRules, rng: StdRng) -> Self {
        Self {
            rules,
            inner: Arc::new(Mutex::new(RegistryInner {
                games: HashMap::new(),
                next_id: 1,
                rng,
            })),
        }
    }

    /// Returns the rule set shared by every session.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Creates a new session for the given owner and returns its public
    /// view. Ids are assigned sequentially and never reused.
    #[instrument(skip(self))]
    pub fn create_game(&self, owner_id: &str) -> SessionView {
        let mut inner = self.inner.lock().unwrap();

        let id = inner.next_id;
        inner.next_id += 1;

        let secret = generate_secret(&self.rules, &mut inner.rng);
        let session = GameSession::new(id, owner_id.to_string(), secret);
        let view = session.view(&self.rules);
        inner.games.insert(id, session);

        info!(game_id = id, "Created new game");
        view
    }

    /// Returns the public view of a session, if it exists and belongs to
    /// the caller.
    #[instrument(skip(self))]
    pub fn get_game(&self, game_id: GameId, owner_id: &str) -> Option<SessionView> {
        let inner = self.inner.lock().unwrap();
        let session = inner
            .games
            .get(&game_id)
            .filter(|session| session.owner_id == owner_id);

        if session.is_none() {
            debug!(game_id, "Game not found for owner");
        }

        session.map(|session| session.view(&self.rules))
    }

    /// Applies a guess to a session.
    ///
    /// Validation, scoring, the history append, and status resolution all
    /// happen while holding the registry lock, and no state changes unless
    /// every check passes.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotFound`] if no session with that id belongs to the
    ///   caller.
    /// - [`GameError::InvalidGuess`] if the guess text is not exactly
    ///   `code_length` alphabet symbols.
    /// - [`GameError::GameFinished`] if the session is already won or lost.
    #[instrument(skip(self, guess))]
    pub fn submit_guess(
        &self,
        game_id: GameId,
        owner_id: &str,
        guess: &str,
    ) -> Result<GuessOutcome, GameError> {
        let mut inner = self.inner.lock().unwrap();

        let session = inner
            .games
            .get_mut(&game_id)
            .filter(|session| session.owner_id == owner_id)
            .ok_or_else(|| {
                debug!(game_id, "Guess against missing or foreign game");
                GameError::NotFound
            })?;

        if !self.rules.is_valid_guess(guess) {
            warn!(game_id, "Rejected malformed guess");
            return Err(GameError::InvalidGuess {
                pattern: self.rules.guess_pattern(),
            });
        }

        if session.status.is_terminal() {
            warn!(game_id, status = ?session.status, "Guess against finished game");
            return Err(GameError::GameFinished);
        }

        let attempt_number = session.attempts_used + 1;
        let hint = score_guess(&session.secret, guess);
        let created_at = Utc::now();

        session.guesses.push(GuessRecord {
            attempt_number,
            guess: guess.to_string(),
            hint,
            created_at,
        });
        session.attempts_used = attempt_number;
        session.status = self.resolve_status(hint.exact, attempt_number);
        session.updated_at = created_at;

        info!(
            game_id,
            attempt_number,
            exact = hint.exact,
            color_only = hint.color_only,
            status = ?session.status,
            "Guess accepted"
        );

        Ok(GuessOutcome {
            game_id: session.id,
            attempt_number,
            guess: guess.to_string(),
            hint,
            status_after_guess: session.status,
            remaining_attempts: self.rules.max_attempts().saturating_sub(attempt_number),
        })
    }

    /// Resolves the status after a guess: a full exact match wins, an
    /// exhausted attempt budget loses, anything else stays active.
    fn resolve_status(&self, exact: usize, attempt_number: u32) -> GameStatus {
        if exact == self.rules.code_length() {
            GameStatus::Won
        } else if attempt_number >= self.rules.max_attempts() {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new(GameRules::default())
    }
}
