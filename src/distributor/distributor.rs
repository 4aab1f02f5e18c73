use crate::proposer::protocol::{LineRequest, ENDPOINT_LINE};
use crate::protocol::endpoint_url;
use crate::transport::sender::Transport;

use std::path::Path;

/// Sends `line` to every proposer in `proposers`, one after the other.
///
/// Returns how many proposers acknowledged. With no proposers the line is
/// dropped with a notice.
pub async fn distribute(transport: &Transport, proposers: &[String], line: &str) -> usize {
    if proposers.is_empty() {
        tracing::warn!("No proposers registered, dropping line");
        return 0;
    }

    let request = LineRequest {
        text: line.to_string(),
    };
    let mut delivered = 0;
    for url in proposers {
        if transport
            .send(&endpoint_url(url, ENDPOINT_LINE), &request)
            .await
            .is_delivered()
        {
            delivered += 1;
        }
    }
    delivered
}

/// Loads a document as trimmed, non-empty lines.
pub async fn read_work_units(path: &Path) -> std::io::Result<Vec<String>> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
