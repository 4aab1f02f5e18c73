//! In-memory cluster membership kept by the coordinator.

use super::types::{NodeAddr, ProposerEntry, Role, Topology};
use crate::error::PipelineError;
use crate::partition::assigner::assign_ranges;
use crate::partition::range::Range;

/// What a successful registration asks the caller to send.
#[derive(Debug, Clone)]
pub struct Registration {
    pub role: Role,
    /// Fresh `(proposer url, range)` assignments, in registration order.
    pub assignments: Vec<(String, Range)>,
    /// Topology after the change, to broadcast to every node.
    pub snapshot: Topology,
}

#[derive(Debug, Default)]
pub struct NodeRegistry {
    topology: Topology,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Adds a node and recomputes proposer ranges.
    ///
    /// Proposers and acceptors already known by url are left as they are; the
    /// learner slot is always replaced. Ranges are recomputed either way.
    pub fn register(
        &mut self,
        role: Option<&str>,
        url: Option<&str>,
    ) -> Result<Registration, PipelineError> {
        let (role, url) = match (role, url) {
            (Some(role), Some(url)) if !role.is_empty() && !url.is_empty() => (role, url),
            _ => return Err(PipelineError::InvalidNode("Missing url")),
        };
        let role: Role = role.parse()?;

        match role {
            Role::Proposer => self.add_proposer(url),
            Role::Acceptor => self.add_acceptor(url),
            Role::Learner => {
                tracing::info!("Learner set to {}", url);
                self.topology.learner = Some(NodeAddr::new(url));
            }
        }

        let assignments = assign_ranges(&mut self.topology.proposers);

        Ok(Registration {
            role,
            assignments,
            snapshot: self.topology.clone(),
        })
    }

    fn add_proposer(&mut self, url: &str) {
        if self.topology.proposers.iter().any(|p| p.url == url) {
            tracing::info!("Proposer {} already registered", url);
            return;
        }
        tracing::info!("Registered proposer {}", url);
        self.topology.proposers.push(ProposerEntry::new(url.to_string()));
    }

    fn add_acceptor(&mut self, url: &str) {
        if self.topology.acceptors.iter().any(|a| a.url == url) {
            tracing::info!("Acceptor {} already registered", url);
            return;
        }
        tracing::info!("Registered acceptor {}", url);
        self.topology.acceptors.push(NodeAddr::new(url));
    }
}
