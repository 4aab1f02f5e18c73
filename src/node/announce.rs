use crate::protocol::endpoint_url;
use crate::registry::protocol::{RegisterRequest, ENDPOINT_REGISTER};
use crate::registry::types::Role;
use crate::transport::sender::{DeliveryOutcome, Transport};

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Registers this node with the coordinator once, after `delay`.
///
/// The delay gives the local listener time to come up before the coordinator
/// starts pushing to it. Cancelling during the delay skips the announcement and
/// yields `None`; once the send has started it runs to completion within the
/// transport's own retry budget.
pub fn spawn_announcement(
    transport: Arc<Transport>,
    coordinator_url: String,
    role: Role,
    self_url: String,
    delay: Duration,
    cancel: CancellationToken,
) -> JoinHandle<Option<DeliveryOutcome>> {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Announcement to {} cancelled", coordinator_url);
                None
            }
            _ = tokio::time::sleep(delay) => {
                let request = RegisterRequest::new(role.as_str(), &self_url);
                let url = endpoint_url(&coordinator_url, ENDPOINT_REGISTER);
                let outcome = transport.send(&url, &request).await;
                if outcome.is_delivered() {
                    tracing::info!(
                        "Registered as {} with {} after {} attempt(s)",
                        role,
                        coordinator_url,
                        outcome.attempts()
                    );
                } else {
                    tracing::error!(
                        "Could not register with coordinator {} after {} attempts",
                        coordinator_url,
                        outcome.attempts()
                    );
                }
                Some(outcome)
            }
        }
    })
}
