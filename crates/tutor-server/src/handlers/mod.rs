//! HTTP route handlers for the tutor server.

pub mod chat;
pub mod history;
pub mod index;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
