// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Router assembly and server startup

use axum::extract::{DefaultBodyLimit, State};
use axum::http::HeaderValue;
use axum::response::{Html, IntoResponse};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::delete_image::delete_image_handler;
use super::download_image::download_image_handler;
use super::generate_image::generate_image_handler;
use crate::config::AppConfig;
use crate::gemini::GeminiClient;
use crate::storage::ImageStore;
use crate::version;

/// Shared state handed to every handler. Configuration is immutable after
/// startup; client and store are stateless beyond their directories.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub generator: Arc<GeminiClient>,
    pub store: Arc<ImageStore>,
}

/// Build the application router. Split out from `start_server` so tests can
/// drive it with `tower::ServiceExt::oneshot`.
pub fn build_router(state: AppState) -> Router {
    let cors = if state.config.allows_any_origin() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/generate-image", post(generate_image_handler))
        .route("/api/v1/download/:filename", get(download_image_handler))
        .route("/api/v1/delete/:filename", delete(delete_image_handler))
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        // The generate handler enforces the configured upload limit itself;
        // axum's default body cap would otherwise cut oversize uploads off
        // mid-parse and the 400 would cite a multipart error instead of the
        // byte limit.
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port).parse()?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("image node listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// GET / - landing page if the static bundle is present, JSON status otherwise
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let index = state.config.static_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(page) => Html(page).into_response(),
        Err(_) => Json(json!({
            "status": "healthy",
            "service": version::SERVICE_NAME,
            "version": version::VERSION,
            "message": "Frontend not found. Please ensure static files are properly configured.",
        }))
        .into_response(),
    }
}

/// GET /health
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
