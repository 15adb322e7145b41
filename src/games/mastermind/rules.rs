//! Immutable game configuration.

use serde::{Deserialize, Serialize};

/// Fixed rules shared by every game in a registry.
///
/// Read-only after startup: the symbol alphabet, how many symbols make up a
/// code, and how many guesses a player gets before the game is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    symbols: Vec<char>,
    code_length: usize,
    max_attempts: u32,
}

impl GameRules {
    /// Creates a rule set from an alphabet, code length, and attempt budget.
    pub fn new(symbols: Vec<char>, code_length: usize, max_attempts: u32) -> Self {
        debug_assert!(!symbols.is_empty());
        debug_assert!(code_length > 0);
        debug_assert!(max_attempts > 0);
        Self {
            symbols,
            code_length,
            max_attempts,
        }
    }

    /// Returns the symbol alphabet in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the alphabet as owned strings, one per symbol.
    pub fn symbol_strings(&self) -> Vec<String> {
        self.symbols.iter().map(|c| c.to_string()).collect()
    }

    /// Returns the number of symbols in a code.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Returns the maximum number of guesses per game.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Checks that a guess is exactly `code_length` symbols, each drawn from
    /// the alphabet.
    pub fn is_valid_guess(&self, guess: &str) -> bool {
        let mut count = 0;
        for c in guess.chars() {
            if !self.symbols.contains(&c) {
                return false;
            }
            count += 1;
        }
        count == self.code_length
    }

    /// Renders the accepted guess shape as a regex-style pattern, e.g.
    /// `^[1-6]{4}$` for the default rules.
    pub fn guess_pattern(&self) -> String {
        let contiguous = self
            .symbols
            .windows(2)
            .all(|w| w[1] as u32 == w[0] as u32 + 1);
        let charset = if contiguous && self.symbols.len() > 2 {
            format!(
                "{}-{}",
                self.symbols[0],
                self.symbols[self.symbols.len() - 1]
            )
        } else {
            self.symbols.iter().collect()
        };
        format!("^[{}]{{{}}}$", charset, self.code_length)
    }
}

impl Default for GameRules {
    /// Reference configuration: symbols `1`-`6`, codes of 4, 10 attempts.
    fn default() -> Self {
        Self::new(vec!['1', '2', '3', '4', '5', '6'], 4, 10)
    }
}
