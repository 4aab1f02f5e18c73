//! Work Distribution Module
//!
//! Fans every unit of work (one line of text) out to all known proposers. The
//! distributor knows nothing about ranges; each proposer filters for itself.
//!
//! ## Submodules
//! - **`distributor`**: The fan-out itself and document loading.
//! - **`handlers`**: Coordinator endpoints that start a document or submit a line.
//! - **`protocol`**: Request bodies for those endpoints.

pub mod distributor;
pub mod handlers;
pub mod protocol;
