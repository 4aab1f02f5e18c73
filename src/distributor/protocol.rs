use serde::{Deserialize, Serialize};

/// Starts distribution of a document on the coordinator.
pub const ENDPOINT_START: &str = "/start";
/// Distributes a single line submitted by a work source.
pub const ENDPOINT_SUBMIT_LINE: &str = "/submit_line";

pub const DEFAULT_DOCUMENT: &str = "sample.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRequest {
    #[serde(default = "default_document")]
    pub filename: String,
}

impl Default for StartRequest {
    fn default() -> Self {
        Self {
            filename: default_document(),
        }
    }
}

fn default_document() -> String {
    DEFAULT_DOCUMENT.to_string()
}
