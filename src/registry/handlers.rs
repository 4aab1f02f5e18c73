use super::protocol::RegisterRequest;
use super::service::Coordinator;
use crate::error::PipelineError;
use crate::protocol::StatusResponse;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: String,
}

pub async fn handle_home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to the Coordinator".to_string(),
    })
}

pub async fn handle_register(
    Extension(coordinator): Extension<Arc<Coordinator>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, PipelineError> {
    let Json(req) = payload?;
    let role = coordinator.register(&req).await?;
    tracing::debug!("Registration of {} handled", role);
    Ok(Json(StatusResponse::new("Registered")))
}
