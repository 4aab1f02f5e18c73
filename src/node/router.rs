use crate::acceptor::handlers as acceptor_handlers;
use crate::acceptor::protocol::ENDPOINT_ACCEPT;
use crate::acceptor::service::Acceptor;
use crate::distributor::handlers::{handle_start, handle_submit_line};
use crate::distributor::protocol::{ENDPOINT_START, ENDPOINT_SUBMIT_LINE};
use crate::proposer::handlers as proposer_handlers;
use crate::proposer::protocol::{ENDPOINT_LINE, ENDPOINT_SET_RANGE, ENDPOINT_STATE, ENDPOINT_UPLOAD};
use crate::proposer::service::Proposer;
use crate::registry::handlers::{handle_home, handle_register};
use crate::registry::protocol::{ENDPOINT_NODES, ENDPOINT_REGISTER};
use crate::registry::service::Coordinator;

use axum::extract::Extension;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn coordinator_router(coordinator: Arc<Coordinator>) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route(ENDPOINT_REGISTER, post(handle_register))
        .route(ENDPOINT_START, post(handle_start))
        .route(ENDPOINT_SUBMIT_LINE, post(handle_submit_line))
        .layer(Extension(coordinator))
}

pub fn proposer_router(proposer: Arc<Proposer>) -> Router {
    Router::new()
        .route(ENDPOINT_LINE, post(proposer_handlers::handle_line))
        .route(ENDPOINT_SET_RANGE, post(proposer_handlers::handle_set_range))
        .route(ENDPOINT_UPLOAD, post(proposer_handlers::handle_upload))
        .route(ENDPOINT_NODES, post(proposer_handlers::handle_nodes))
        .route(ENDPOINT_STATE, get(proposer_handlers::handle_state))
        .layer(Extension(proposer))
}

pub fn acceptor_router(acceptor: Arc<Acceptor>) -> Router {
    Router::new()
        .route(ENDPOINT_ACCEPT, post(acceptor_handlers::handle_accept))
        .route(ENDPOINT_NODES, post(acceptor_handlers::handle_nodes))
        .layer(Extension(acceptor))
}
