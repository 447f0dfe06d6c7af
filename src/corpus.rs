//! Word list helpers.
//!
//! Loading a corpus from disk, building a trie from it, and checking that a
//! reduced pattern list still covers the words it was built from.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::data_structures::{LauTrie, LauTrieConfig};
use crate::error::{LauError, LauResult};

/// Reads one word per line from `path`.
///
/// Blank lines are skipped and a trailing carriage return is dropped, so
/// files with Windows line endings load the same words. Other whitespace is
/// part of the word.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> LauResult<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LauError::Corpus {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    debug!(path = ?path, words = words.len(), "loaded word list");
    Ok(words)
}

/// Builds a trie holding every word of `words`.
pub fn build_trie<I>(words: I, config: LauTrieConfig) -> LauResult<LauTrie>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut trie = LauTrie::with_config(config);
    let added = trie.insert_all(words)?;
    info!(distinct = added, nodes = trie.node_count(), "trie built");
    Ok(trie)
}

/// Whether `pattern` stands for `word`.
///
/// A pattern ending in `replacement` matches every word starting with the
/// rest of the pattern. Any other pattern matches only itself.
pub fn covers(word: &str, pattern: &str, replacement: char) -> bool {
    match pattern.strip_suffix(replacement) {
        Some(stem) => word.starts_with(stem),
        None => word == pattern,
    }
}

/// The words of `words` that no pattern of `patterns` covers, in input order.
pub fn uncovered<W, P>(words: W, patterns: P, replacement: char) -> Vec<String>
where
    W: IntoIterator,
    W::Item: AsRef<str>,
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    let mut exact = BTreeSet::new();
    let mut stems = BTreeSet::new();
    for pattern in patterns {
        let pattern: &str = pattern.as_ref();
        match pattern.strip_suffix(replacement) {
            Some(stem) => stems.insert(stem.to_string()),
            None => exact.insert(pattern.to_string()),
        };
    }

    words
        .into_iter()
        .filter_map(|word| {
            let word: &str = word.as_ref();
            let mut prefix_ends = word
                .char_indices()
                .map(|(i, _)| i)
                .chain(Some(word.len()));
            let covered =
                exact.contains(word) || prefix_ends.any(|end| stems.contains(&word[..end]));
            (!covered).then(|| word.to_string())
        })
        .collect()
}
