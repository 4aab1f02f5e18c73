//! First-Stage Aggregation Module (Proposer)
//!
//! Receives every line the coordinator distributes, keeps only the words whose
//! first letter falls in this node's range, and accumulates a running count per
//! range. After each line the whole accumulated state for the active range is
//! pushed to a capped number of acceptors.
//!
//! ## Lifecycle
//! A proposer starts **Unranged** unless given an initial range. Lines received in
//! that state are rejected with `RangeNotSet` and change nothing. The first valid
//! `set_range` moves it to **Ranged**, where it stays.
//!
//! ## Submodules
//! - **`tokenizer`**: Splits a line into lower-cased alphabetic words.
//! - **`state`**: The accumulated counts and the pure filtering/accumulation logic.
//! - **`service`**: The node context: state lock, topology view, outbound messages.
//! - **`handlers`**: HTTP endpoints (`/line`, `/set_range`, `/upload`, `/nodes`, `/state`).
//! - **`protocol`**: Endpoint paths and request/response bodies.

pub mod handlers;
pub mod protocol;
pub mod service;
pub mod state;
pub mod tokenizer;
