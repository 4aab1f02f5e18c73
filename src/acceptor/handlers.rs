use super::protocol::SubmissionRequest;
use super::service::Acceptor;
use crate::error::PipelineError;
use crate::protocol::StatusResponse;
use crate::registry::types::Topology;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_accept(
    Extension(acceptor): Extension<Arc<Acceptor>>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, PipelineError> {
    let Json(req) = payload?;
    tracing::debug!("Received submission: {:?}", req);

    acceptor.accept(req).await?;
    Ok(Json(StatusResponse::new("Accepted")))
}

pub async fn handle_nodes(
    Extension(acceptor): Extension<Arc<Acceptor>>,
    payload: Result<Json<Topology>, JsonRejection>,
) -> Result<Json<StatusResponse>, PipelineError> {
    let Json(snapshot) = payload?;
    acceptor.replace_topology(snapshot).await;
    Ok(Json(StatusResponse::new("Nodes updated")))
}
