// Copyright (c) 2025 Lau Radix Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lau Trie.
//!
//! This module defines the error types that can occur during Lau Trie operations.
//! Queries never fail; only insertion (with a configured key limit) and
//! reduction can report an error.

use std::fmt;

/// Why a reduction stopped before reaching its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustionCause {
    /// There was nothing left to collapse or delete.
    ///
    /// Not produced by a consistent trie: an empty forest holds no words, so
    /// the word count is already at or below any target before this is
    /// checked. Kept so a corrupted count fails instead of looping.
    EmptyForest,

    /// The configured number of reduction steps was used up.
    AttemptBudget(usize),
}

impl fmt::Display for ExhaustionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyForest => write!(f, "the trie is empty"),
            Self::AttemptBudget(attempts) => write!(f, "gave up after {attempts} attempts"),
        }
    }
}

/// Errors that can occur in Lau Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LauTrieError {
    /// Error when a key exceeds the configured maximum length.
    #[error("Key '{key}' exceeds maximum key length of {max_length}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed length in symbols.
        max_length: usize,
    },

    /// Error when a reduction cannot bring the word count down to its target.
    #[error("Cannot reduce to {target} words ({remaining} remain): {cause}")]
    ExhaustedReduction {
        /// The requested maximum number of distinct words.
        target: usize,
        /// The number of distinct words left when the reduction stopped.
        remaining: usize,
        /// Why the reduction stopped.
        cause: ExhaustionCause,
    },
}

/// Result type for Lau Trie operations
pub type LauTrieResult<T> = Result<T, LauTrieError>;
