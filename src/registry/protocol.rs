//! Registry Network Protocol
//!
//! Endpoints and bodies used to join the cluster and to distribute topology.

use serde::{Deserialize, Serialize};

/// Coordinator endpoint nodes announce themselves on.
pub const ENDPOINT_REGISTER: &str = "/register";
/// Endpoint on every node that accepts a full topology snapshot.
pub const ENDPOINT_NODES: &str = "/nodes";

/// Registration body. Both fields are optional on the wire so that a missing
/// field is reported as an invalid node rather than a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "type", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RegisterRequest {
    pub fn new(role: &str, url: &str) -> Self {
        Self {
            role: Some(role.to_string()),
            url: Some(url.to_string()),
        }
    }
}
