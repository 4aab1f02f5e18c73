//! Node Assembly Module
//!
//! Wires each role's context into an HTTP router and provides the one-shot
//! self-announcement every non-coordinating node performs after startup.

pub mod announce;
pub mod router;
