use super::protocol::{Submission, SubmissionRequest};
use crate::error::PipelineError;
use crate::partition::range::Range;

/// Turns a received submission into a validated one, or says why not.
pub fn validate(request: SubmissionRequest) -> Result<Submission, PipelineError> {
    let letter_range = match request.letter_range {
        Some(range) if !range.is_empty() => range,
        _ => return Err(PipelineError::InvalidSubmission),
    };

    let range = Range::parse(&letter_range)
        .map_err(|_| PipelineError::ValidationFailed("range is malformed"))?;

    if !request.words.iter().all(|word| range.contains(word)) {
        return Err(PipelineError::ValidationFailed("word outside range"));
    }

    if request.words.len() != request.count {
        return Err(PipelineError::ValidationFailed(
            "count does not match words",
        ));
    }

    Ok(Submission {
        letter_range,
        count: request.count,
        words: request.words,
    })
}
