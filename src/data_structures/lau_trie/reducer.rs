//! Size-bounded reduction of the stored word set.
//!
//! Each step finds the deepest node and collapses its parent into a single
//! wildcard-terminated entry, discarding the subtree below it. The step is
//! lossy: only the shared prefix and the replacement marker survive. A
//! childless root has no parent to collapse and is deleted instead.

use tracing::{debug, info};

use super::config::{PrunePolicy, ReductionOptions};
use super::error::{ExhaustionCause, LauTrieError, LauTrieResult};
use super::node::NodeId;
use super::LauTrie;

/// What a single reduction step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReductionStep {
    /// A childless root was deleted together with its word.
    RemovedRoot {
        /// The deleted word
        word: String,
    },

    /// A subtree was replaced by one wildcard-terminated entry.
    Collapsed {
        /// The new entry, replacement symbol included
        prefix: String,
        /// How many distinct words the step removed
        words_removed: usize,
    },
}

/// Summary of a reduction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReductionReport {
    /// Distinct words before the run
    pub words_before: usize,
    /// Distinct words after the run
    pub words_after: usize,
    /// Steps taken
    pub steps: usize,
    /// Roots deleted outright
    pub roots_removed: usize,
    /// Subtrees collapsed into wildcard entries
    pub subtrees_collapsed: usize,
}

impl LauTrie {
    /// Shrinks the trie to at most `target` distinct words.
    ///
    /// Uses the attempt budget and prune policy from the trie's
    /// configuration. See [`LauTrie::reduce`].
    pub fn delete_words(
        &mut self,
        target: usize,
        replacement: char,
    ) -> LauTrieResult<ReductionReport> {
        let options = ReductionOptions {
            target,
            replacement,
            max_attempts: self.config.max_reduction_attempts,
            policy: self.config.prune_policy,
        };
        self.reduce(&options)
    }

    /// Shrinks the trie to at most `options.target` distinct words.
    ///
    /// # Returns
    ///
    /// * `Ok(ReductionReport)` - The target was reached.
    /// * `Err(LauTrieError::ExhaustedReduction)` - The trie ran empty or the
    ///   attempt budget elapsed first. The trie is left valid either way.
    pub fn reduce(&mut self, options: &ReductionOptions) -> LauTrieResult<ReductionReport> {
        let mut report = ReductionReport {
            words_before: self.unique_words,
            ..ReductionReport::default()
        };

        while self.unique_words > options.target {
            if let Some(max_attempts) = options.max_attempts {
                if report.steps >= max_attempts {
                    let cause = ExhaustionCause::AttemptBudget(max_attempts);
                    return Err(self.exhausted(options.target, cause));
                }
            }

            match self.prune_step(options.replacement, options.policy) {
                Some(ReductionStep::RemovedRoot { .. }) => report.roots_removed += 1,
                Some(ReductionStep::Collapsed { .. }) => report.subtrees_collapsed += 1,
                None => return Err(self.exhausted(options.target, ExhaustionCause::EmptyForest)),
            }
            report.steps += 1;
        }

        report.words_after = self.unique_words;
        info!(
            before = report.words_before,
            after = report.words_after,
            steps = report.steps,
            "reduction finished"
        );
        Ok(report)
    }

    /// Runs one reduction step with the configured prune policy.
    ///
    /// Returns `None` when the trie is empty.
    pub fn delete_one(&mut self, replacement: char) -> Option<ReductionStep> {
        self.prune_step(replacement, self.config.prune_policy)
    }

    fn prune_step(&mut self, replacement: char, policy: PrunePolicy) -> Option<ReductionStep> {
        let deepest = match policy {
            PrunePolicy::PreserveCoverage => self.deepest(true).or_else(|| self.deepest(false)),
            PrunePolicy::DeepestNode => self.deepest(false),
        }?;

        let parent = self.arena[deepest].parent;
        let step = match parent {
            None => ReductionStep::RemovedRoot {
                word: self.remove_root(deepest),
            },
            Some(parent) => {
                let words_removed = self.collapse(parent, replacement);
                ReductionStep::Collapsed {
                    prefix: self.path_string(parent),
                    words_removed,
                }
            }
        };
        debug!(?step, remaining = self.unique_words, "reduction step");
        Some(step)
    }

    /// Deletes a root and its subtree, returning the root's string.
    fn remove_root(&mut self, root: NodeId) -> String {
        let word = self.path_string(root);
        let node = &self.arena[root];
        let (key, leaves) = (node.key(), node.leaves);
        self.roots.remove(&key);
        self.free_subtree(root);
        self.unique_words -= leaves;
        word
    }

    /// Turns `id` into a single wildcard-terminated entry standing in for
    /// its whole subtree. Returns how many distinct words were dropped.
    fn collapse(&mut self, id: NodeId, replacement: char) -> usize {
        let (children, leaves, above) = {
            let node = &mut self.arena[id];
            node.label.push(replacement);
            node.count = 1;
            let leaves = std::mem::replace(&mut node.leaves, 1);
            (std::mem::take(&mut node.children), leaves, node.parent)
        };

        for child in children.into_values() {
            self.free_subtree(child);
        }

        let removed = leaves.saturating_sub(1);
        self.sub_leaves(above, removed);
        self.unique_words -= removed;
        removed
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.arena.release(next) {
                stack.extend(node.children.into_values());
            }
        }
    }

    fn exhausted(&self, target: usize, cause: ExhaustionCause) -> LauTrieError {
        LauTrieError::ExhaustedReduction {
            target,
            remaining: self.unique_words,
            cause,
        }
    }
}
