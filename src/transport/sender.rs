use crate::config::TransportConfig;

use serde::Serialize;
use std::time::Duration;

/// Result of pushing one message to a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The peer acknowledged with a success status.
    Delivered { status: u16, attempts: usize },
    /// Every attempt failed; the message is dropped.
    Exhausted { attempts: usize },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }

    pub fn attempts(&self) -> usize {
        match self {
            DeliveryOutcome::Delivered { attempts, .. } => *attempts,
            DeliveryOutcome::Exhausted { attempts } => *attempts,
        }
    }
}

/// Retrying JSON-over-HTTP sender.
pub struct Transport {
    http_client: reqwest::Client,
    retries: usize,
    delay: Duration,
    request_timeout: Option<Duration>,
}

impl Transport {
    pub fn new(config: &TransportConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            retries: config.retries.max(1),
            delay: config.retry_delay,
            request_timeout: config.request_timeout,
        }
    }

    /// POSTs `payload` to `url`, retrying until acknowledged or out of attempts.
    ///
    /// Blocks for at most `retries * delay` plus the time spent in the attempts
    /// themselves. Never returns an error: exhaustion is logged and reported as
    /// [`DeliveryOutcome::Exhausted`].
    pub async fn send<T: Serialize + ?Sized>(&self, url: &str, payload: &T) -> DeliveryOutcome {
        for attempt in 1..=self.retries {
            tracing::info!("Sending to {} (attempt {}/{})", url, attempt, self.retries);

            let mut request = self.http_client.post(url).json(payload);
            if let Some(timeout) = self.request_timeout {
                request = request.timeout(timeout);
            }

            match request.send().await {
                Ok(resp) if resp.status().is_success() => {
                    tracing::info!("Response from {}: {}", url, resp.status());
                    return DeliveryOutcome::Delivered {
                        status: resp.status().as_u16(),
                        attempts: attempt,
                    };
                }
                Ok(resp) => {
                    tracing::error!("Attempt {} failed: {} answered {}", attempt, url, resp.status());
                }
                Err(e) => {
                    tracing::error!("Attempt {} failed: {}", attempt, e);
                }
            }

            if attempt < self.retries {
                tokio::time::sleep(self.delay).await;
            }
        }

        tracing::error!("All {} attempts failed for {}", self.retries, url);
        DeliveryOutcome::Exhausted {
            attempts: self.retries,
        }
    }
}
