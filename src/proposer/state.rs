use super::tokenizer::{match_tokens, tokenize_line};
use crate::acceptor::protocol::Submission;
use crate::config::RerangePolicy;
use crate::error::PipelineError;
use crate::partition::range::Range;
use crate::registry::types::Topology;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Running match count and matched words for one range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatedState {
    pub count: usize,
    pub words: Vec<String>,
}

impl AccumulatedState {
    pub fn absorb(&mut self, matched: Vec<String>) {
        self.count += matched.len();
        self.words.extend(matched);
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 && self.words.is_empty()
    }
}

/// Everything a proposer mutates, kept behind the node's single lock.
#[derive(Debug, Default)]
pub struct ProposerState {
    pub range: Option<Range>,
    /// Keyed by the range's wire form.
    pub counts: BTreeMap<String, AccumulatedState>,
    pub topology: Topology,
}

impl ProposerState {
    pub fn new(range: Option<Range>) -> Self {
        Self {
            range,
            ..Self::default()
        }
    }

    /// Installs `value` as the active range.
    ///
    /// Under [`RerangePolicy::Reset`] a change of range discards all counts;
    /// under `Preserve` counts stay and a warning is logged if any exist.
    pub fn set_range(&mut self, value: &str, policy: RerangePolicy) -> Result<Range, PipelineError> {
        let range = Range::parse(value)?;

        let changed = self.range.as_ref() != Some(&range);
        if changed && self.has_counts() {
            match policy {
                RerangePolicy::Reset => {
                    tracing::info!("Range changed to {}, clearing accumulated counts", range);
                    self.counts.clear();
                }
                RerangePolicy::Preserve => {
                    tracing::warn!(
                        "Range changed to {} while counts for {:?} are still held",
                        range,
                        self.counts.keys().collect::<Vec<_>>()
                    );
                }
            }
        }

        self.range = Some(range.clone());
        Ok(range)
    }

    /// Filters `line` by the active range and adds the matches to its counts.
    ///
    /// Returns the complete accumulated state for that range as a submission.
    /// An unranged proposer fails without touching any state.
    pub fn process_line(&mut self, line: &str) -> Result<Submission, PipelineError> {
        let range = self.range.clone().ok_or(PipelineError::RangeNotSet)?;

        let tokens = tokenize_line(line);
        tracing::debug!("Words found: {:?}", tokens);
        let matched = match_tokens(tokens, &range);
        tracing::debug!("Matched words for {}: {:?}", range, matched);

        let key = range.to_string();
        let entry = self.counts.entry(key.clone()).or_default();
        entry.absorb(matched);

        Ok(Submission {
            letter_range: key,
            count: entry.count,
            words: entry.words.clone(),
        })
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn has_counts(&self) -> bool {
        self.counts.values().any(|c| !c.is_empty())
    }

    pub fn range_label(&self) -> String {
        self.range.as_ref().map(Range::to_string).unwrap_or_default()
    }
}
