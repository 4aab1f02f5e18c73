//! Transport Module
//!
//! The single place where inter-node delivery policy lives. Every message a node
//! sends to a peer (range assignments, topology broadcasts, fanned-out lines,
//! submissions, resets, announcements) goes through [`sender::Transport`].
//!
//! ## Delivery Semantics
//! - **Bounded retries**: a fixed number of attempts with a fixed pause between them.
//! - **Success**: only a 2xx acknowledgment counts. Connection errors and any other
//!   status are failed attempts.
//! - **Fire-and-forget**: exhaustion is logged and reported as a value, never as an
//!   error. Callers decide whether they care.

pub mod sender;
