//! Service identity.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::SharedState;
use molbank_common::messages;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub server_id: String,
}

/// GET / - which replica answered
pub async fn root(State(state): State<SharedState>) -> Json<RootResponse> {
    Json(RootResponse { server_id: state.server_id.clone() })
}

/// Any route that does not exist.
pub async fn fallback() -> ApiError {
    ApiError::NotFound(messages::ROUTE_NOT_FOUND.to_string())
}
