//! Transcript read and reset handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::dto::{ClearHistoryResponse, HistoryResponse};
use crate::error::AppError;
use crate::ServerState;

/// Returns the transcript for a user (empty if none was recorded).
pub async fn get(
    State(state): State<Arc<ServerState>>,
    Path(user_id): Path<String>,
) -> Json<HistoryResponse> {
    let messages = state.history.get(&user_id);
    Json(HistoryResponse { user_id, messages })
}

/// Drops the transcript for a user.
pub async fn clear(
    State(state): State<Arc<ServerState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ClearHistoryResponse>, AppError> {
    if !state.history.clear(&user_id) {
        return Err(AppError::UnknownUser(user_id));
    }
    info!("Cleared history for {} ({} users tracked)", user_id, state.history.user_count());
    Ok(Json(ClearHistoryResponse { success: true }))
}
