//! Thin interactive adapter: drives the registry from stdin/stdout.

use crate::games::mastermind::GameStatus;
use crate::session::GameRegistry;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Owner id for the single local player.
const LOCAL_OWNER: &str = "local";

/// Runs one interactive game: reads guesses line by line until the game
/// ends or stdin closes.
pub fn run() -> Result<()> {
    let registry = GameRegistry::default();
    let rules = registry.rules().clone();
    let view = registry.create_game(LOCAL_OWNER);

    println!(
        "Guess the {}-symbol code. Symbols: {}. You have {} attempts.",
        rules.code_length(),
        rules.symbol_strings().join(" "),
        rules.max_attempts()
    );

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("guess> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let guess = line.trim();
        if guess.is_empty() {
            continue;
        }

        match registry.submit_guess(view.id, LOCAL_OWNER, guess) {
            Ok(outcome) => {
                println!(
                    "exact: {}  color only: {}  ({} attempts left)",
                    outcome.hint.exact, outcome.hint.color_only, outcome.remaining_attempts
                );
                match outcome.status_after_guess {
                    GameStatus::Won => {
                        println!("You cracked the code in {} attempts!", outcome.attempt_number);
                        break;
                    }
                    GameStatus::Lost => {
                        let code = registry
                            .get_game(view.id, LOCAL_OWNER)
                            .and_then(|v| v.revealed_code)
                            .unwrap_or_default();
                        println!("Out of attempts. The code was {}.", code);
                        break;
                    }
                    GameStatus::Active => {}
                }
            }
            Err(err) => println!("{}", err),
        }
    }

    Ok(())
}
