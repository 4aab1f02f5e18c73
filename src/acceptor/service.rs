use super::protocol::{SubmissionRequest, ENDPOINT_LEARN};
use super::validator::validate;
use crate::config::NodeConfig;
use crate::error::PipelineError;
use crate::protocol::endpoint_url;
use crate::registry::types::{NodeId, Topology};
use crate::transport::sender::Transport;

use std::sync::Arc;
use tokio::sync::Mutex;

/// Acceptor node context. Its only mutable state is the topology view.
pub struct Acceptor {
    pub node_id: NodeId,
    pub config: NodeConfig,
    transport: Arc<Transport>,
    topology: Mutex<Topology>,
}

impl Acceptor {
    pub fn new(config: NodeConfig) -> Arc<Self> {
        let transport = Arc::new(Transport::new(&config.transport));
        Arc::new(Self {
            node_id: NodeId::new(),
            config,
            transport,
            topology: Mutex::new(Topology::default()),
        })
    }

    /// Validates a submission and forwards it to the learner when one is known.
    ///
    /// A valid submission counts as accepted even if there is no learner to
    /// forward to or the learner cannot be reached.
    pub async fn accept(&self, request: SubmissionRequest) -> Result<(), PipelineError> {
        let submission = validate(request)?;
        tracing::info!(
            "Accepted {} words for {}",
            submission.count,
            submission.letter_range
        );

        let learner = self.topology.lock().await.learner_url();
        match learner {
            Some(url) => {
                tracing::info!("Sending to learner: {}", url);
                self.transport
                    .send(&endpoint_url(&url, ENDPOINT_LEARN), &submission)
                    .await;
            }
            None => tracing::warn!("No learner registered"),
        }

        Ok(())
    }

    pub async fn replace_topology(&self, snapshot: Topology) {
        tracing::info!("Updated nodes: learner={:?}", snapshot.learner_url());
        *self.topology.lock().await = snapshot;
    }

    pub async fn topology(&self) -> Topology {
        self.topology.lock().await.clone()
    }
}
