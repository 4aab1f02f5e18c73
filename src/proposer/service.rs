use super::protocol::StateResponse;
use super::state::ProposerState;
use crate::acceptor::protocol::{Submission, ENDPOINT_ACCEPT, ENDPOINT_RESET};
use crate::config::NodeConfig;
use crate::error::PipelineError;
use crate::partition::range::Range;
use crate::protocol::endpoint_url;
use crate::registry::types::{NodeId, Topology};
use crate::transport::sender::Transport;

use std::sync::Arc;
use tokio::sync::Mutex;

/// Proposer node context handed to every proposer handler.
///
/// `state` is the only mutable part and its lock is never held across a send:
/// each operation mutates, snapshots what it needs to send, and releases.
pub struct Proposer {
    pub node_id: NodeId,
    pub config: NodeConfig,
    transport: Arc<Transport>,
    state: Mutex<ProposerState>,
}

impl Proposer {
    pub fn new(config: NodeConfig, initial_range: Option<Range>) -> Arc<Self> {
        let transport = Arc::new(Transport::new(&config.transport));
        if let Some(range) = &initial_range {
            tracing::info!("Proposer is responsible for letter range: {}", range);
        }
        Arc::new(Self {
            node_id: NodeId::new(),
            config,
            transport,
            state: Mutex::new(ProposerState::new(initial_range)),
        })
    }

    pub async fn set_range(&self, value: &str) -> Result<Range, PipelineError> {
        tracing::info!("Attempting to set range: {}", value);
        let range = self
            .state
            .lock()
            .await
            .set_range(value, self.config.rerange_policy)?;
        tracing::info!("Set range: {}", range);
        Ok(range)
    }

    /// Processes one line and pushes the updated state for the active range to
    /// the leading acceptors. Returns the range that was used.
    pub async fn process_line(&self, line: &str) -> Result<String, PipelineError> {
        let (submission, acceptors) = {
            let mut state = self.state.lock().await;
            let submission = state.process_line(line)?;
            let acceptors = state.topology.leading_acceptors(self.config.fanout_width);
            (submission, acceptors)
        };

        self.send_to_acceptors(&acceptors, &submission).await;
        Ok(submission.letter_range)
    }

    async fn send_to_acceptors(&self, acceptors: &[String], submission: &Submission) {
        if acceptors.is_empty() {
            tracing::warn!("No acceptors registered");
            return;
        }
        for url in acceptors {
            tracing::info!(
                "Sending {} words for {} to {}",
                submission.count,
                submission.letter_range,
                url
            );
            self.transport
                .send(&endpoint_url(url, ENDPOINT_ACCEPT), submission)
                .await;
        }
    }

    /// Clears every range's counts and asks the learner to reset as well.
    /// The learner notice is best-effort.
    pub async fn reset(&self) {
        let learner = {
            let mut state = self.state.lock().await;
            state.clear();
            state.topology.learner_url()
        };
        tracing::info!("Cleared accumulated counts for new document");

        match learner {
            Some(url) => {
                let outcome = self
                    .transport
                    .send(&endpoint_url(&url, ENDPOINT_RESET), &serde_json::json!({}))
                    .await;
                if outcome.is_delivered() {
                    tracing::info!("Sent reset request to learner: {}", url);
                } else {
                    tracing::warn!("Failed to reset learner {}", url);
                }
            }
            None => tracing::warn!("No learner registered, skipping reset"),
        }
    }

    /// Resets once, then processes each non-blank line in order.
    ///
    /// Stops at the first failing line and returns its error. On success returns
    /// the label of the range in force afterwards.
    pub async fn process_document(&self, text: &str) -> Result<String, PipelineError> {
        self.reset().await;

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            self.process_line(line).await?;
        }

        Ok(self.state.lock().await.range_label())
    }

    pub async fn replace_topology(&self, snapshot: Topology) {
        tracing::info!(
            "Updated nodes: {} proposers, {} acceptors, learner={:?}",
            snapshot.proposers.len(),
            snapshot.acceptors.len(),
            snapshot.learner_url()
        );
        self.state.lock().await.topology = snapshot;
    }

    pub async fn snapshot(&self) -> StateResponse {
        let state = self.state.lock().await;
        StateResponse {
            range: state.range.as_ref().map(Range::to_string),
            counts: state.counts.clone(),
        }
    }

    pub async fn topology(&self) -> Topology {
        self.state.lock().await.topology.clone()
    }
}
