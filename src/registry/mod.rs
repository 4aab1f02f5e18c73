//! Node Registry Module
//!
//! The coordinator's view of the cluster and the only place topology is decided.
//! Nodes register themselves here; every successful registration recomputes the
//! proposer ranges and broadcasts the complete topology to every known node.
//!
//! ## Core Mechanisms
//! - **Idempotent membership**: proposers and acceptors are keyed by url, in
//!   registration order. The learner slot is single and always overwritten.
//! - **Eager broadcast**: topology is pushed, not pulled, and carries no version.
//!   Nodes may act on a stale view between pushes.
//! - **Wholesale replacement**: non-coordinating nodes overwrite their local view
//!   with whatever snapshot arrives.

pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod service;
pub mod types;
