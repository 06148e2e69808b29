use axum::{
    extract::{Path, State},
    http::{HeaderMap, Method},
    response::Response,
};
use nt_core::AppError;
use tracing::instrument;

use crate::metrics::track_auth_request;
use crate::state::AppState;

/// Hands the request to the configured auth handler unchanged.
#[instrument(skip(state, headers))]
pub async fn delegate(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let result = state.auth_handler.handle(&method, &path, &headers).await;

    let status = match &result {
        Ok(response) => response.status(),
        Err(e) => e.status,
    };
    track_auth_request(&path, status.as_u16());

    result
}
