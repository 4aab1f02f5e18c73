use super::range::{Range, ALPHABET};
use crate::proposer::protocol::{SetRangeRequest, ENDPOINT_SET_RANGE};
use crate::protocol::endpoint_url;
use crate::registry::types::ProposerEntry;
use crate::transport::sender::Transport;

/// Splits the alphabet into `count` blocks of `ceil(26 / count)` letters.
///
/// The result has one slot per proposer, in order. Slots whose block would start
/// past the last letter are `None`. Zero proposers yields an empty list.
pub fn block_ranges(count: usize) -> Vec<Option<Range>> {
    if count == 0 {
        return vec![];
    }

    let letters = ALPHABET.len();
    let block = letters.div_ceil(count);

    (0..count)
        .map(|i| {
            let start_idx = i * block;
            if start_idx >= letters {
                return None;
            }
            let end_idx = (start_idx + block - 1).min(letters - 1);
            Some(Range::from_bounds(ALPHABET[start_idx], ALPHABET[end_idx]))
        })
        .collect()
}

/// Recomputes ranges for the current proposer list and records them on each entry.
///
/// Returns the `(url, range)` pairs that need pushing. Proposers left without a
/// block keep whatever range they had before and are not included.
pub fn assign_ranges(proposers: &mut [ProposerEntry]) -> Vec<(String, Range)> {
    let blocks = block_ranges(proposers.len());
    let mut assignments = Vec::new();

    for (proposer, block) in proposers.iter_mut().zip(blocks) {
        let Some(range) = block else {
            tracing::warn!("No range left for proposer {}", proposer.url);
            continue;
        };
        proposer.range = Some(range.to_string());
        tracing::info!("Assigned {} to {}", range, proposer.url);
        assignments.push((proposer.url.clone(), range));
    }

    assignments
}

/// Sends each assignment to its owner. A failed push leaves that proposer stale
/// until the next registration recomputes everything.
pub async fn push_assignments(transport: &Transport, assignments: &[(String, Range)]) {
    for (url, range) in assignments {
        let request = SetRangeRequest {
            range: range.to_string(),
        };
        let outcome = transport
            .send(&endpoint_url(url, ENDPOINT_SET_RANGE), &request)
            .await;
        if !outcome.is_delivered() {
            tracing::warn!("Range {} was not delivered to {}", range, url);
        }
    }
}
