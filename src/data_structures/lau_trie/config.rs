// Copyright (c) 2025 Lau Radix Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lau Trie and its reducer.

use serde::{Deserialize, Serialize};

/// Configuration options for the Lau Trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LauTrieConfig {
    /// Maximum key length in symbols. `None` accepts keys of any length.
    pub max_key_length: Option<usize>,

    /// Maximum number of reduction steps a single `delete_words` call may take.
    /// `None` lets the reducer run until it reaches its target.
    pub max_reduction_attempts: Option<usize>,

    /// How `delete_words` picks the node to prune at each step.
    pub prune_policy: PrunePolicy,
}

impl LauTrieConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject keys longer than `max_key_length` symbols.
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = Some(max_key_length);
        self
    }

    /// Bound the number of steps a reduction may take.
    pub fn with_max_reduction_attempts(mut self, attempts: usize) -> Self {
        self.max_reduction_attempts = Some(attempts);
        self
    }

    /// Use `policy` for reductions started with `delete_words`.
    pub fn with_prune_policy(mut self, policy: PrunePolicy) -> Self {
        self.prune_policy = policy;
        self
    }
}

/// Which node a reduction step prunes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrunePolicy {
    /// Collapse the parent of the deepest node that has one. A childless root
    /// is deleted only once no collapse is left, so every stored word keeps
    /// a covering prefix for as long as the target allows.
    ///
    /// This differs from the classic deleteWords rule, which always takes the
    /// deepest node overall and stops after ten steps. That rule is
    /// [`PrunePolicy::DeepestNode`] together with
    /// [`LauTrieConfig::with_max_reduction_attempts`]`(10)`.
    #[default]
    PreserveCoverage,

    /// Take the deepest node overall. When that node is a childless root the
    /// root is deleted outright, even if collapsing elsewhere would do.
    DeepestNode,
}

/// Parameters for a single reduction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionOptions {
    /// Maximum number of distinct words left after the reduction.
    pub target: usize,

    /// Symbol appended to every collapsed prefix.
    pub replacement: char,

    /// Maximum number of reduction steps, `None` for unbounded.
    pub max_attempts: Option<usize>,

    /// How each step picks the node to prune.
    pub policy: PrunePolicy,
}

impl ReductionOptions {
    /// Reduce to `target` words using `replacement` as the wildcard marker.
    pub fn new(target: usize, replacement: char) -> Self {
        Self {
            target,
            replacement,
            max_attempts: None,
            policy: PrunePolicy::default(),
        }
    }

    /// Give up after `attempts` reduction steps.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Pick pruned nodes according to `policy`.
    pub fn with_policy(mut self, policy: PrunePolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LauTrieConfig::default();
        assert_eq!(config.max_key_length, None);
        assert_eq!(config.max_reduction_attempts, None);
        assert_eq!(config.prune_policy, PrunePolicy::PreserveCoverage);
    }

    #[test]
    fn test_config_builder() {
        let config = LauTrieConfig::new()
            .with_max_key_length(128)
            .with_max_reduction_attempts(10)
            .with_prune_policy(PrunePolicy::DeepestNode);
        assert_eq!(config.max_key_length, Some(128));
        assert_eq!(config.max_reduction_attempts, Some(10));
        assert_eq!(config.prune_policy, PrunePolicy::DeepestNode);

        let options = ReductionOptions::new(30, '*').with_max_attempts(5);
        assert_eq!(options.target, 30);
        assert_eq!(options.replacement, '*');
        assert_eq!(options.max_attempts, Some(5));
        assert_eq!(options.policy, PrunePolicy::PreserveCoverage);

        let options = options.with_policy(PrunePolicy::DeepestNode);
        assert_eq!(options.policy, PrunePolicy::DeepestNode);
    }
}
