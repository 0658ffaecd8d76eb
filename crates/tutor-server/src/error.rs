//! Errors the HTTP layer turns into JSON error responses.

use std::io;
use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Request failures that do not fit the chat reply shape.
#[derive(Error, Debug)]
pub enum AppError {
    /// `DELETE /history/{user_id}` for a user with no transcript.
    #[error("No history for user '{0}'")]
    UnknownUser(String),

    /// The browser client page could not be read.
    #[error("failed to read {}", path.display())]
    IndexUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownUser(_) => StatusCode::NOT_FOUND,
            AppError::IndexUnreadable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::IndexUnreadable { source, .. } = &self {
            error!("{}: {}", self, source);
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
