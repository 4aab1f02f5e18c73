use super::protocol::{RegisterRequest, ENDPOINT_NODES};
use super::registry::NodeRegistry;
use super::types::{NodeId, Role, Topology};
use crate::config::NodeConfig;
use crate::distributor::distributor::{distribute, read_work_units};
use crate::error::PipelineError;
use crate::partition::assigner::push_assignments;
use crate::protocol::endpoint_url;
use crate::transport::sender::Transport;

use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Coordinator node: owns the registry and feeds lines to the proposers.
///
/// Registry mutation happens under `registry`, which is never held across a
/// send. `dispatch` is taken first and held until a registration's pushes and
/// broadcast are done, so peers receive assignments and snapshots in the order
/// they were computed.
pub struct Coordinator {
    pub node_id: NodeId,
    pub config: NodeConfig,
    transport: Arc<Transport>,
    dispatch: Mutex<()>,
    registry: Mutex<NodeRegistry>,
}

impl Coordinator {
    pub fn new(config: NodeConfig) -> Arc<Self> {
        let transport = Arc::new(Transport::new(&config.transport));
        Arc::new(Self {
            node_id: NodeId::new(),
            config,
            transport,
            dispatch: Mutex::new(()),
            registry: Mutex::new(NodeRegistry::new()),
        })
    }

    pub async fn topology(&self) -> Topology {
        self.registry.lock().await.topology().clone()
    }

    /// Registers a node, pushes any new range assignments, then broadcasts the
    /// resulting topology to every known node.
    ///
    /// Registrations are handled one at a time from start to finish. A slow or
    /// retried push delays the next registration instead of racing it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Role, PipelineError> {
        let _dispatch = self.dispatch.lock().await;
        let registration = {
            let mut registry = self.registry.lock().await;
            registry.register(request.role.as_deref(), request.url.as_deref())?
        };

        push_assignments(&self.transport, &registration.assignments).await;
        self.broadcast(&registration.snapshot).await;

        Ok(registration.role)
    }

    async fn broadcast(&self, snapshot: &Topology) {
        for url in snapshot.all_urls() {
            let outcome = self
                .transport
                .send(&endpoint_url(&url, ENDPOINT_NODES), snapshot)
                .await;
            if !outcome.is_delivered() {
                tracing::warn!("Topology update did not reach {}", url);
            }
        }
    }

    /// Fans one line out to every currently known proposer.
    pub async fn distribute_line(&self, line: &str) -> usize {
        let proposers = self.topology().await.proposer_urls();
        distribute(&self.transport, &proposers, line).await
    }

    /// Reads a document and distributes each non-empty, trimmed line in order.
    pub async fn distribute_document(&self, path: &Path) -> Result<usize, PipelineError> {
        let lines = read_work_units(path).await?;
        tracing::info!("Distributing {} lines from {}", lines.len(), path.display());

        for line in &lines {
            self.distribute_line(line).await;
        }
        Ok(lines.len())
    }
}
