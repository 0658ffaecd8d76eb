//! HTTP server entry point and Axum router setup.
//!
//! Loads configuration, builds the shared server state once, configures
//! routes, and serves until Ctrl-C.

mod config;
mod dto;
mod error;
mod handlers;
mod services;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tutor_core::ModelConfig;
use tutor_llm::{GeminiClient, LlmGateway};

use crate::config::ServerConfig;
use crate::services::history::ConversationStore;

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub model: ModelConfig,
    pub gateway: Arc<dyn LlmGateway>,
    pub history: ConversationStore,
    pub index_path: PathBuf,
}

impl ServerState {
    /// Builds the state from loaded configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        let gateway = GeminiClient::new(config.api_key.clone(), config.model.api_base.as_deref());
        Self {
            model: config.model.clone(),
            gateway: Arc::new(gateway),
            history: ConversationStore::new(),
            index_path: config.index_path.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    info!("API key set: {}", !config.api_key.is_empty());
    info!("Using model {}", config.model.model);
    if !config.index_path.exists() {
        warn!("Index page {} not found; GET / will fail", config.index_path.display());
    }

    let state = Arc::new(ServerState::from_config(&config));
    let app = router(state);

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Builds the application router over shared state.
fn router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route(
            "/history/{user_id}",
            get(handlers::history::get).delete(handlers::history::clear),
        )
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
