//! Serves the browser client.

use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::error::AppError;
use crate::ServerState;

/// Reads the index page from disk on every request.
pub async fn index(State(state): State<Arc<ServerState>>) -> Result<Html<String>, AppError> {
    tokio::fs::read_to_string(&state.index_path)
        .await
        .map(Html)
        .map_err(|source| AppError::IndexUnreadable {
            path: state.index_path.clone(),
            source,
        })
}
