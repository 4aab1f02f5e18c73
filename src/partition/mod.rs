//! Key-Range Partitioning Module
//!
//! Splits the 26-letter alphabet into contiguous, non-overlapping blocks, one per
//! proposer, in registration order. A word belongs to the proposer whose range
//! contains its first letter.
//!
//! ## Submodules
//! - **`range`**: The inclusive `start-end` range value, its parsing and matching rules.
//! - **`assigner`**: Block computation and pushing assignments to their owners.

pub mod assigner;
pub mod range;
