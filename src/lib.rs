//! Range-Partitioned Word Pipeline
//!
//! Splits word counting across cooperating HTTP nodes. A coordinator partitions
//! the alphabet among proposers and fans lines out to them; proposers keep the
//! words in their range and push running totals to acceptors; acceptors check
//! those totals and forward them to an external learner.
//!
//! ## Architecture Modules
//! - **`transport`**: Retrying point-to-point sender used for every cross-node message.
//! - **`partition`**: Letter ranges and the deterministic block assignment.
//! - **`registry`**: The coordinator's membership, range assignment trigger and
//!   topology broadcast.
//! - **`distributor`**: Fan-out of lines (or whole documents) to all proposers.
//! - **`proposer`**: First-stage filtering and accumulation.
//! - **`acceptor`**: Second-stage validation and forwarding to the learner.
//! - **`node`**: Routers per role and the startup self-announcement.

pub mod acceptor;
pub mod config;
pub mod distributor;
pub mod error;
pub mod node;
pub mod partition;
pub mod proposer;
pub mod protocol;
pub mod registry;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;
