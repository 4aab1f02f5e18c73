//! Node Configuration
//!
//! Tunables shared by every role. The binary fills these from command-line flags
//! (with environment fallbacks); library users and tests build them directly.

use std::time::Duration;

pub const DEFAULT_RETRIES: usize = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_FANOUT_WIDTH: usize = 2;
pub const DEFAULT_ANNOUNCE_DELAY: Duration = Duration::from_secs(1);

/// Retry policy for every inter-node message.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Total delivery attempts per message (values below 1 are treated as 1).
    pub retries: usize,
    /// Fixed pause between two attempts.
    pub retry_delay: Duration,
    /// Optional cap on a single attempt. `None` leaves attempts unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            request_timeout: None,
        }
    }
}

/// What a proposer does with its accumulated counts when it is handed a new range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RerangePolicy {
    /// Keep counts gathered under earlier ranges.
    #[default]
    Preserve,
    /// Drop all counts whenever the range actually changes.
    Reset,
}

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub transport: TransportConfig,
    /// How many acceptors (in topology order) receive each proposer submission.
    pub fanout_width: usize,
    /// Pause before a node announces itself to the coordinator.
    pub announce_delay: Duration,
    pub rerange_policy: RerangePolicy,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            transport: TransportConfig::default(),
            fanout_width: DEFAULT_FANOUT_WIDTH,
            announce_delay: DEFAULT_ANNOUNCE_DELAY,
            rerange_policy: RerangePolicy::default(),
        }
    }
}
