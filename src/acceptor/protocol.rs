//! Acceptor and Learner Network Protocol

use serde::{Deserialize, Serialize};

/// Acceptor endpoint receiving proposer submissions.
pub const ENDPOINT_ACCEPT: &str = "/accept";
/// Learner endpoint receiving validated submissions.
pub const ENDPOINT_LEARN: &str = "/learn";
/// Learner endpoint signalling that a new document has started.
pub const ENDPOINT_RESET: &str = "/reset";

/// Accumulated state of one range as it travels proposer -> acceptor -> learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub letter_range: String,
    pub count: usize,
    pub words: Vec<String>,
}

/// Submission as received, before validation. Count and words default the way
/// the sender would have meant an empty submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub letter_range: Option<String>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub words: Vec<String>,
}
