use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/store/:key
/// Returns the raw stored string.
pub async fn handle_get_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<String, AppError> {
    state
        .store
        .get(&key)
        .ok_or_else(|| AppError::NotFound(format!("no value stored under '{key}'")))
}

/// PUT /api/v1/store/:key
/// Stores the request body verbatim. The upstream email generator uses this
/// to hand over `preGeneratedEmailData`.
pub async fn handle_put_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: String,
) -> Result<StatusCode, AppError> {
    let size = body.len();
    state.store.set(&key, body)?;
    info!("Stored {size} byte(s) under '{key}'");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/store/:key
pub async fn handle_delete_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> StatusCode {
    state.store.remove(&key);
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/store
pub async fn handle_clear(State(state): State<AppState>) -> StatusCode {
    let count = state.store.len();
    state.store.clear();
    info!("Client store cleared ({count} key(s))");
    StatusCode::NO_CONTENT
}
