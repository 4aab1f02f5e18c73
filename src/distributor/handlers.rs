use super::protocol::StartRequest;
use crate::error::PipelineError;
use crate::proposer::protocol::LineRequest;
use crate::protocol::StatusResponse;
use crate::registry::service::Coordinator;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use std::path::Path;
use std::sync::Arc;

pub async fn handle_start(
    Extension(coordinator): Extension<Arc<Coordinator>>,
    payload: Result<Json<StartRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, PipelineError> {
    // A bodiless start falls back to the default document.
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => StartRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    coordinator
        .distribute_document(Path::new(&req.filename))
        .await?;
    Ok(Json(StatusResponse::new("Document processed")))
}

pub async fn handle_submit_line(
    Extension(coordinator): Extension<Arc<Coordinator>>,
    payload: Result<Json<LineRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, PipelineError> {
    let Json(req) = payload?;
    let delivered = coordinator.distribute_line(&req.text).await;
    Ok(Json(StatusResponse::new(format!(
        "Line delivered to {} proposers",
        delivered
    ))))
}
