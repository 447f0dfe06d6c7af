//! Benchmarking support for Lau Radix.
//!
//! Deterministic synthetic word lists, so benchmark runs compare like with like.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Syllables synthetic words are made of.
const SYLLABLES: &[&str] = &[
    "ka", "la", "lu", "ma", "na", "ni", "pa", "pu", "ha", "he", "ho", "ko", "ki", "wa", "wi", "o",
];

/// Generate `count` words of one to `max_syllables` syllables each.
///
/// The same `seed` always yields the same list. Words share prefixes the
/// way natural vocabularies do, and duplicates are possible.
pub fn synthetic_words(count: usize, max_syllables: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_syllables = max_syllables.max(1);

    (0..count)
        .map(|_| {
            let syllables = rng.gen_range(1..=max_syllables);
            (0..syllables)
                .filter_map(|_| SYLLABLES.choose(&mut rng).copied())
                .collect::<String>()
        })
        .collect()
}
