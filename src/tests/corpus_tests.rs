//! Tests that run word lists through the corpus helpers and the reducer.

use super::{word_list_strategy, TestFixture};
use crate::config::LauConfig;
use crate::corpus::{build_trie, covers, load_word_list, uncovered};
use crate::data_structures::lau_trie::{LauTrieConfig, PrunePolicy, ReductionOptions};
use proptest::prelude::*;

const ALPHABET: &[char] = &['a', 'b', 'c'];

const PLANETS: &[&str] = &[
    "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune", "pluto",
    "ceres", "eris", "makemake", "haumea", "mars",
];

#[test]
fn test_word_list_from_disk_is_covered_after_reduction() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_word_list("planets.txt", PLANETS).unwrap();

    let words = load_word_list(&path).unwrap();
    assert_eq!(words.len(), PLANETS.len());

    let config = LauConfig::default();
    let mut trie = build_trie(&words, config.trie_config()).unwrap();
    assert_eq!(trie.unique_word_count(), PLANETS.len() - 1);
    assert_eq!(trie.multiplicity("mars"), 2);

    let report = trie.delete_words(10, '*').unwrap();
    assert_eq!(report.words_after, 10);
    assert_eq!(report.roots_removed, 0);
    assert!(trie.validate());

    let patterns = trie.get_words();
    assert!(uncovered(&words, &patterns, '*').is_empty(), "{patterns:?}");
}

#[test]
fn test_every_pattern_covers_some_word() {
    let mut trie = build_trie(PLANETS, LauTrieConfig::default()).unwrap();
    trie.delete_words(5, '~').unwrap();

    for pattern in trie.get_words() {
        assert!(
            PLANETS.iter().any(|word| covers(word, &pattern, '~')),
            "{pattern} covers nothing"
        );
    }
}

#[test]
fn test_deepest_node_policy_may_drop_words() {
    // "xyzzy" is the deepest node and a childless root
    let words = ["xyzzy", "q", "ab", "ac"];
    let mut trie = build_trie(words, LauTrieConfig::default()).unwrap();
    let options = ReductionOptions::new(2, '*').with_policy(PrunePolicy::DeepestNode);
    let report = trie.reduce(&options).unwrap();

    assert!(report.roots_removed > 0);
    assert!(trie.validate());
    assert!(!uncovered(words, trie.get_words(), '*').is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_preserve_coverage_keeps_every_word(
        words in word_list_strategy(ALPHABET, 40),
        target in 3usize..12,
    ) {
        let mut trie = build_trie(&words, LauTrieConfig::default()).unwrap();
        let report = trie.reduce(&ReductionOptions::new(target, '*')).unwrap();

        prop_assert!(report.words_after <= target);
        prop_assert_eq!(report.roots_removed, 0);
        prop_assert!(trie.validate());
        let missing = uncovered(&words, trie.get_words(), '*');
        prop_assert!(missing.is_empty(), "uncovered: {:?}", missing);
    }

    #[test]
    fn prop_word_list_round_trips_through_disk(words in word_list_strategy(ALPHABET, 20)) {
        let fixture = TestFixture::new().unwrap();
        let path = fixture.create_word_list("words.txt", &words).unwrap();
        prop_assert_eq!(load_word_list(&path).unwrap(), words);
    }
}
