//! Chat handler: one prompt in, one formatted reply out.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{error, info};
use tutor_core::Message;
use uuid::Uuid;

use crate::dto::{ChatRequest, ChatResponse};
use crate::services::chat::{complete_chat, preview};
use crate::ServerState;

/// Chat endpoint. Gateway failures are reported in the body with HTTP 200.
pub async fn chat(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        "Chat request (user: {}, model: {}): {}...",
        req.user_id,
        state.model.model,
        preview(&req.prompt, 50)
    );

    state.history.record(&req.user_id, Message::user(&req.prompt));

    match complete_chat(state.gateway.as_ref(), &state.model.model, &req.prompt).await {
        Ok(text) => {
            info!(%request_id, "Chat reply: {}...", preview(&text, 50));
            state.history.record(&req.user_id, Message::assistant(&text));
            Json(ChatResponse::ok(text))
        }
        Err(e) => {
            error!(%request_id, "Chat error: {}", e);
            Json(ChatResponse::failed(e))
        }
    }
}
