//! State-machine tests for the game registry.

use codebreaker::{GameError, GameRegistry, GameRules, GameStatus, generate_secret};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Builds a registry whose first secret is known to the test.
fn seeded_registry(seed: u64) -> (GameRegistry, String) {
    let rules = GameRules::default();
    let secret = generate_secret(&rules, &mut StdRng::seed_from_u64(seed));
    let registry = GameRegistry::with_rng(rules, StdRng::seed_from_u64(seed));
    (registry, secret)
}

/// A guess that differs from the secret in the first position, so it can
/// never score a full exact match.
fn miss_for(secret: &str) -> String {
    let mut chars: Vec<char> = secret.chars().collect();
    chars[0] = if chars[0] == '1' { '2' } else { '1' };
    chars.into_iter().collect()
}

#[test]
fn create_and_get_roundtrip() {
    let registry = GameRegistry::default();
    let created = registry.create_game("alice");

    assert_eq!(created.id, 1);
    assert_eq!(created.status, GameStatus::Active);
    assert_eq!(created.code_length, 4);
    assert_eq!(created.symbols, vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(created.max_attempts, 10);
    assert_eq!(created.attempts_used, 0);
    assert!(created.guesses.is_empty());
    assert_eq!(created.revealed_code, None);

    let fetched = registry.get_game(created.id, "alice").expect("own game");
    assert_eq!(fetched, created);
}

#[test]
fn foreign_sessions_look_nonexistent() {
    let registry = GameRegistry::default();
    let game = registry.create_game("alice");

    assert_eq!(registry.get_game(game.id, "mallory"), None);
    assert_eq!(registry.get_game(999, "alice"), None);
    assert_eq!(
        registry.submit_guess(game.id, "mallory", "1234"),
        Err(GameError::NotFound)
    );
    assert_eq!(
        registry.submit_guess(999, "alice", "1234"),
        Err(GameError::NotFound)
    );

    // The failed attempts left the real session untouched.
    let view = registry.get_game(game.id, "alice").unwrap();
    assert_eq!(view.attempts_used, 0);
}

#[test]
fn winning_guess_ends_the_game() {
    let (registry, secret) = seeded_registry(42);
    let game = registry.create_game("alice");

    let outcome = registry.submit_guess(game.id, "alice", &secret).unwrap();
    assert_eq!(outcome.attempt_number, 1);
    assert_eq!(outcome.hint.exact, 4);
    assert_eq!(outcome.hint.color_only, 0);
    assert_eq!(outcome.status_after_guess, GameStatus::Won);
    assert_eq!(outcome.remaining_attempts, 9);

    // Won games never reveal the secret.
    let view = registry.get_game(game.id, "alice").unwrap();
    assert_eq!(view.status, GameStatus::Won);
    assert_eq!(view.revealed_code, None);
    assert_eq!(view.attempts_used, 1);

    // Terminal state rejects further guesses without state change.
    assert_eq!(
        registry.submit_guess(game.id, "alice", &secret),
        Err(GameError::GameFinished)
    );
    let view = registry.get_game(game.id, "alice").unwrap();
    assert_eq!(view.attempts_used, 1);
}

#[test]
fn exhausting_attempts_loses_and_reveals_the_secret() {
    let (registry, secret) = seeded_registry(7);
    let game = registry.create_game("alice");
    let miss = miss_for(&secret);

    for attempt in 1..=9 {
        let outcome = registry.submit_guess(game.id, "alice", &miss).unwrap();
        assert_eq!(outcome.attempt_number, attempt);
        assert_eq!(outcome.status_after_guess, GameStatus::Active);
        assert_eq!(outcome.remaining_attempts, 10 - attempt);

        // History stays in lockstep with the attempt counter.
        let view = registry.get_game(game.id, "alice").unwrap();
        assert_eq!(view.attempts_used, attempt);
        assert_eq!(view.guesses.len() as u32, attempt);
        assert_eq!(view.revealed_code, None);
    }

    let outcome = registry.submit_guess(game.id, "alice", &miss).unwrap();
    assert_eq!(outcome.attempt_number, 10);
    assert_eq!(outcome.status_after_guess, GameStatus::Lost);
    assert_eq!(outcome.remaining_attempts, 0);

    let view = registry.get_game(game.id, "alice").unwrap();
    assert_eq!(view.status, GameStatus::Lost);
    assert_eq!(view.attempts_used, 10);
    assert_eq!(view.revealed_code, Some(secret));
    let numbers: Vec<u32> = view.guesses.iter().map(|g| g.attempt_number).collect();
    assert_eq!(numbers, (1..=10).collect::<Vec<_>>());

    assert_eq!(
        registry.submit_guess(game.id, "alice", &miss),
        Err(GameError::GameFinished)
    );
    let view = registry.get_game(game.id, "alice").unwrap();
    assert_eq!(view.attempts_used, 10);
}

#[test]
fn malformed_guesses_are_rejected_without_state_change() {
    let registry = GameRegistry::default();
    let game = registry.create_game("alice");

    for guess in ["99", "", "123", "12345", "1a34", "7777"] {
        let err = registry.submit_guess(game.id, "alice", guess).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuess {
                pattern: "^[1-6]{4}$".into()
            },
            "guess {guess:?}"
        );
    }

    let view = registry.get_game(game.id, "alice").unwrap();
    assert_eq!(view.attempts_used, 0);
    assert!(view.guesses.is_empty());
    assert_eq!(view.status, GameStatus::Active);
}

#[test]
fn validation_is_checked_before_terminal_state() {
    let (registry, secret) = seeded_registry(11);
    let game = registry.create_game("alice");
    registry.submit_guess(game.id, "alice", &secret).unwrap();

    // A malformed guess against a finished game reports the shape problem.
    let err = registry.submit_guess(game.id, "alice", "99").unwrap_err();
    assert_eq!(err.code(), "invalid_guess");
}

#[test]
fn owners_get_independent_id_sequences_from_one_counter() {
    let registry = GameRegistry::default();
    let a = registry.create_game("alice");
    let b = registry.create_game("bob");
    let c = registry.create_game("alice");

    assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    assert!(registry.get_game(b.id, "alice").is_none());
    assert!(registry.get_game(a.id, "bob").is_none());
}

#[test]
fn concurrent_guesses_on_one_session_never_race() {
    let (registry, secret) = seeded_registry(5);
    let game = registry.create_game("alice");
    let id = game.id;
    let miss = miss_for(&secret);

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let registry = registry.clone();
            let miss = miss.clone();
            std::thread::spawn(move || registry.submit_guess(id, "alice", &miss))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // Exactly the attempt budget succeeds; the rest hit the terminal state.
    let mut numbers: Vec<u32> = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|o| o.attempt_number)
        .collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| *e == GameError::GameFinished)
    );

    let view = registry.get_game(id, "alice").unwrap();
    assert_eq!(view.status, GameStatus::Lost);
    assert_eq!(view.attempts_used, 10);
    assert_eq!(view.guesses.len(), 10);
}
