//! Path matching shared by insertion and the membership queries.

use super::node::NodeId;
use super::LauTrie;

/// Where matching an input against the trie stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Location {
    /// The last node matching reached
    pub(crate) node: NodeId,
    /// Input symbols consumed
    pub(crate) input_index: usize,
    /// Label symbols of `node` consumed
    pub(crate) label_index: usize,
}

/// The four ways a located input relates to the node it stopped at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Input and label end together.
    Exact,
    /// The label is exhausted and input remains, with no child for the next symbol.
    Extend,
    /// The input ends strictly inside the label.
    PrefixSplit,
    /// Input and label disagree strictly inside the label.
    BranchSplit,
}

impl Location {
    pub(crate) fn outcome(&self, input_len: usize, label_len: usize) -> Outcome {
        let label_done = self.label_index == label_len;
        let input_done = self.input_index == input_len;
        match (label_done, input_done) {
            (true, true) => Outcome::Exact,
            (true, false) => Outcome::Extend,
            (false, true) => Outcome::PrefixSplit,
            (false, false) => Outcome::BranchSplit,
        }
    }
}

impl LauTrie {
    /// Matches `input` from the forest root keyed by its first symbol.
    ///
    /// Returns `None` for empty input or when no root starts with the first
    /// symbol.
    pub(crate) fn locate(&self, input: &[char]) -> Option<Location> {
        let first = input.first()?;
        let mut node = *self.roots.get(first)?;
        let mut input_index = 0;
        let mut label_index = 0;

        while input_index < input.len() {
            let current = &self.arena[node];
            if label_index < current.label.len() {
                if input[input_index] != current.label[label_index] {
                    break;
                }
                input_index += 1;
                label_index += 1;
            } else {
                match current.children.get(&input[input_index]) {
                    Some(&child) => {
                        node = child;
                        label_index = 0;
                    }
                    None => break,
                }
            }
        }

        Some(Location {
            node,
            input_index,
            label_index,
        })
    }
}
