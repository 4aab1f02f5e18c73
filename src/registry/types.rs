use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Local identity of a running node, used to tag its log lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pipeline stage a node serves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// First stage: filters lines by range and accumulates counts.
    Proposer,
    /// Second stage: validates submissions and forwards them.
    Acceptor,
    /// Terminal aggregator. External; only addressed, never implemented here.
    Learner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Proposer => "proposer",
            Role::Acceptor => "acceptor",
            Role::Learner => "learner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proposer" => Ok(Role::Proposer),
            "acceptor" => Ok(Role::Acceptor),
            "learner" => Ok(Role::Learner),
            _ => Err(PipelineError::InvalidNode("Invalid node type")),
        }
    }
}

/// Address of an acceptor or the learner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeAddr {
    pub url: String,
}

impl NodeAddr {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A proposer and the range the coordinator last computed for it.
///
/// The range is carried as its wire string; peers receiving a snapshot only
/// check its shape, never its content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProposerEntry {
    pub url: String,
    #[serde(default)]
    pub range: Option<String>,
}

impl ProposerEntry {
    pub fn new(url: String) -> Self {
        Self { url, range: None }
    }
}

/// Full cluster view as broadcast to every node.
///
/// Absent fields deserialize as empty, so a partial snapshot replaces the
/// receiver's peers with nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topology {
    #[serde(default)]
    pub proposers: Vec<ProposerEntry>,
    #[serde(default)]
    pub acceptors: Vec<NodeAddr>,
    #[serde(default)]
    pub learner: Option<NodeAddr>,
}

impl Topology {
    /// Every node url a broadcast must reach: proposers, acceptors, then the learner.
    pub fn all_urls(&self) -> Vec<String> {
        self.proposers
            .iter()
            .map(|p| p.url.clone())
            .chain(self.acceptors.iter().map(|a| a.url.clone()))
            .chain(self.learner.iter().map(|l| l.url.clone()))
            .collect()
    }

    pub fn proposer_urls(&self) -> Vec<String> {
        self.proposers.iter().map(|p| p.url.clone()).collect()
    }

    /// The first `width` acceptors in registration order.
    pub fn leading_acceptors(&self, width: usize) -> Vec<String> {
        self.acceptors
            .iter()
            .take(width)
            .map(|a| a.url.clone())
            .collect()
    }

    pub fn learner_url(&self) -> Option<String> {
        self.learner.as_ref().map(|l| l.url.clone())
    }
}
