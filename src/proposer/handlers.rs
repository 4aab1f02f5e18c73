use super::protocol::{LineRequest, SetRangeRequest, StateResponse, UPLOAD_FIELD};
use super::service::Proposer;
use crate::error::{ErrorResponse, PipelineError};
use crate::protocol::StatusResponse;
use crate::registry::types::Topology;

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

/// An unranged proposer still acknowledges the line with a 200 carrying the
/// error body, so the sender does not retry a line that cannot be processed yet.
pub async fn handle_line(
    Extension(proposer): Extension<Arc<Proposer>>,
    payload: Result<Json<LineRequest>, JsonRejection>,
) -> Result<Response, PipelineError> {
    let Json(req) = payload?;
    tracing::info!("Received line: {}", req.text);

    match proposer.process_line(&req.text).await {
        Ok(range) => Ok(Json(StatusResponse::new(format!(
            "Processed line for range {}",
            range
        )))
        .into_response()),
        Err(PipelineError::RangeNotSet) => {
            tracing::warn!("Line dropped, range not set");
            let body = ErrorResponse {
                error: PipelineError::RangeNotSet.to_string(),
            };
            Ok((StatusCode::OK, Json(body)).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn handle_set_range(
    Extension(proposer): Extension<Arc<Proposer>>,
    payload: Result<Json<SetRangeRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, PipelineError> {
    let Json(req) = payload?;
    let range = proposer.set_range(&req.range).await?;
    Ok(Json(StatusResponse::new(format!("Range set to {}", range))))
}

pub async fn handle_upload(
    Extension(proposer): Extension<Arc<Proposer>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<StatusResponse>, PipelineError> {
    let mut multipart = multipart?;
    let text = read_upload(&mut multipart).await?;

    let range = proposer.process_document(&text).await?;
    Ok(Json(StatusResponse::new(format!(
        "File processed for range {}",
        range
    ))))
}

/// Pulls the document out of the `file` part, decoding it lossily as UTF-8.
async fn read_upload(multipart: &mut Multipart) -> Result<String, PipelineError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        if field.file_name().map_or(true, str::is_empty) {
            return Err(PipelineError::EmptyFileName);
        }
        let bytes = field.bytes().await?;
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }
    Err(PipelineError::MissingFile)
}

pub async fn handle_nodes(
    Extension(proposer): Extension<Arc<Proposer>>,
    payload: Result<Json<Topology>, JsonRejection>,
) -> Result<Json<StatusResponse>, PipelineError> {
    let Json(snapshot) = payload?;
    proposer.replace_topology(snapshot).await;
    Ok(Json(StatusResponse::new("Nodes updated")))
}

pub async fn handle_state(Extension(proposer): Extension<Arc<Proposer>>) -> Json<StateResponse> {
    Json(proposer.snapshot().await)
}
