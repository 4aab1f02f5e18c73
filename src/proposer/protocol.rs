//! Proposer Network Protocol

use super::state::AccumulatedState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Receives one distributed line.
pub const ENDPOINT_LINE: &str = "/line";
/// Receives a range assignment from the coordinator.
pub const ENDPOINT_SET_RANGE: &str = "/set_range";
/// Multipart bulk submission of a whole document.
pub const ENDPOINT_UPLOAD: &str = "/upload";
/// Read-only view of the accumulated counts.
pub const ENDPOINT_STATE: &str = "/state";

/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRequest {
    #[serde(default)]
    pub text: String,
}

/// The range travels as a raw string so a bad value is reported as an invalid
/// range rather than a malformed body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRangeRequest {
    #[serde(default)]
    pub range: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateResponse {
    pub range: Option<String>,
    pub counts: BTreeMap<String, AccumulatedState>,
}
