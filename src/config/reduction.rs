//! Reduction configuration module.
//!
//! This module defines the defaults used when a word list is reduced to a
//! bounded set of wildcard patterns.

use super::{ConfigResult, Validate};
use crate::data_structures::lau_trie::{PrunePolicy, ReductionOptions};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Reduction configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReductionConfig {
    /// Maximum number of patterns left after a reduction
    pub target_words: usize,

    /// Wildcard marker appended to collapsed prefixes, exactly one symbol
    pub replacement: String,

    /// Maximum number of steps per reduction, unbounded when absent
    pub max_attempts: Option<usize>,

    /// Node selection strategy
    pub policy: PrunePolicy,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            target_words: 100,
            replacement: "*".to_string(),
            max_attempts: None,
            policy: PrunePolicy::default(),
        }
    }
}

impl ReductionConfig {
    /// The replacement marker as a single symbol.
    pub fn replacement_symbol(&self) -> ConfigResult<char> {
        let mut symbols = self.replacement.chars();
        match (symbols.next(), symbols.next()) {
            (Some(symbol), None) => Ok(symbol),
            _ => Err(ConfigError::invalid(
                "reduction.replacement",
                format!("must be exactly one symbol, got {:?}", self.replacement),
            )),
        }
    }

    /// Build the options for a reduction run from these settings.
    pub fn to_options(&self) -> ConfigResult<ReductionOptions> {
        let replacement = self.replacement_symbol()?;
        let mut options =
            ReductionOptions::new(self.target_words, replacement).with_policy(self.policy);
        if let Some(attempts) = self.max_attempts {
            options = options.with_max_attempts(attempts);
        }
        Ok(options)
    }
}

impl Validate for ReductionConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.replacement_symbol()?;

        if self.max_attempts == Some(0) {
            return Err(ConfigError::invalid("reduction.max_attempts", "must be greater than 0"));
        }

        Ok(())
    }
}
