//! Helpers for tests that need real peers on the loopback interface.

use crate::config::{NodeConfig, TransportConfig};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Config with short retries so failing peers don't slow the suite down.
pub fn fast_config() -> NodeConfig {
    NodeConfig {
        transport: TransportConfig {
            retries: 2,
            retry_delay: Duration::from_millis(10),
            request_timeout: Some(Duration::from_secs(2)),
        },
        announce_delay: Duration::from_millis(20),
        ..NodeConfig::default()
    }
}

/// Serves `app` on an ephemeral port and returns its base url.
pub async fn spawn_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Url of a port that nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Peer that records every request it receives and answers with a fixed status.
#[derive(Clone)]
pub struct Recorder {
    hits: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
    status: StatusCode,
}

impl Recorder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            hits: Arc::new(Mutex::new(Vec::new())),
            status,
        }
    }

    pub async fn spawn(status: StatusCode) -> (Self, String) {
        let recorder = Self::new(status);
        let app = Router::new()
            .fallback(record)
            .with_state(recorder.clone());
        let url = spawn_router(app).await;
        (recorder, url)
    }

    pub async fn hits(&self) -> Vec<(String, serde_json::Value)> {
        self.hits.lock().await.clone()
    }

    pub async fn hits_on(&self, path: &str) -> Vec<serde_json::Value> {
        self.hits
            .lock()
            .await
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, body)| body.clone())
            .collect()
    }
}

async fn record(State(recorder): State<Recorder>, uri: Uri, body: Bytes) -> StatusCode {
    let value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    recorder
        .hits
        .lock()
        .await
        .push((uri.path().to_string(), value));
    recorder.status
}
