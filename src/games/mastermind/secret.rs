//! Secret code generation.

use super::rules::GameRules;
use rand::Rng;

/// Draws a fresh secret code: `code_length` symbols, each chosen
/// independently and uniformly from the alphabet, duplicates allowed.
///
/// The caller supplies the generator so production code can use an
/// entropy-seeded source while tests stay deterministic.
pub fn generate_secret(rules: &GameRules, rng: &mut impl Rng) -> String {
    let symbols = rules.symbols();
    (0..rules.code_length())
        .map(|_| symbols[rng.gen_range(0..symbols.len())])
        .collect()
}
