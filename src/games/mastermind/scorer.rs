//! Guess scoring.

use super::types::Hint;
use std::collections::HashMap;

/// Scores a guess against a secret of the same length.
///
/// First pass counts exact position matches. Symbols that did not match
/// exactly go into per-side multisets, and the color-only count is the sum
/// over all symbols of the smaller multiplicity.
///
/// Pure function with no validation: callers must hand in sequences of equal
/// length drawn from the same alphabet. Malformed guesses are rejected by the
/// registry before scoring is reached.
pub fn score_guess(secret: &str, guess: &str) -> Hint {
    debug_assert_eq!(secret.chars().count(), guess.chars().count());

    let mut exact = 0;
    let mut secret_counts: HashMap<char, usize> = HashMap::new();
    let mut guess_counts: HashMap<char, usize> = HashMap::new();

    for (s, g) in secret.chars().zip(guess.chars()) {
        if s == g {
            exact += 1;
        } else {
            *secret_counts.entry(s).or_default() += 1;
            *guess_counts.entry(g).or_default() += 1;
        }
    }

    let color_only = guess_counts
        .iter()
        .map(|(symbol, count)| (*count).min(*secret_counts.get(symbol).unwrap_or(&0)))
        .sum();

    Hint { exact, color_only }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_swapped_pair() {
        // Positions 0 and 1 match; 3 and 4 are swapped.
        assert_eq!(
            score_guess("1234", "1243"),
            Hint {
                exact: 2,
                color_only: 2
            }
        );
    }

    #[test]
    fn duplicate_symbols_counted_with_multiplicity() {
        // One exact 1; the guess's three leftover 1s only cover the single
        // remaining 1 in the secret.
        assert_eq!(
            score_guess("1123", "1111"),
            Hint {
                exact: 1,
                color_only: 1
            }
        );
    }

    #[test]
    fn identical_sequences_score_all_exact() {
        assert_eq!(
            score_guess("5566", "5566"),
            Hint {
                exact: 4,
                color_only: 0
            }
        );
    }

    #[test]
    fn disjoint_sequences_score_zero() {
        assert_eq!(
            score_guess("1111", "2222"),
            Hint {
                exact: 0,
                color_only: 0
            }
        );
    }

    #[test]
    fn full_exact_only_for_equal_sequences() {
        // Same multiset, different order: never reports a full exact match.
        let hint = score_guess("1234", "4321");
        assert_eq!(
            hint,
            Hint {
                exact: 0,
                color_only: 4
            }
        );
    }

    #[test]
    fn scoring_is_symmetric() {
        let pairs = [
            ("1234", "1243"),
            ("1123", "1111"),
            ("6543", "3456"),
            ("2222", "2221"),
        ];
        for (a, b) in pairs {
            assert_eq!(score_guess(a, b), score_guess(b, a), "pair {a}/{b}");
        }
    }

    #[test]
    fn hint_never_exceeds_code_length() {
        let codes = ["1111", "1234", "6655", "1623", "4444", "5126"];
        for secret in codes {
            for guess in codes {
                let hint = score_guess(secret, guess);
                assert!(hint.exact + hint.color_only <= 4, "{secret}/{guess}");
                assert_eq!(hint.exact == 4, secret == guess, "{secret}/{guess}");
            }
        }
    }
}
