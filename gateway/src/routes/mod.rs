//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the generation endpoints and the health check under a
//! single Axum router. When a site directory is configured, the page that
//! hosts the chat widget is served as static files from the same process.

pub mod generate;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes used by the chat widget and by direct callers.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/generate",
            post(generate::generate).fallback(generate::method_not_allowed),
        )
        .route("/api/chat", post(generate::chat).fallback(generate::method_not_allowed))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Full application router: API routes plus the optional static site.
pub fn app(state: AppState, site_dir: Option<&Path>) -> Router {
    let router = api_routes(state);
    match site_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true)),
        None => router,
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
