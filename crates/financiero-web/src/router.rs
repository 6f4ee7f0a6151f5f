//! Web router using Axum
//!
//! Serves the Trunk build output. Unknown paths fall back to `index.html` so
//! the client-side router can resolve deep links such as `/income`.

use axum::{Json, Router, routing::get};
use financiero_types::manifest;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Create the web router serving files from `dist_dir`
pub fn create_router(dist_dir: impl Into<PathBuf>) -> Router {
    let dist_dir = dist_dir.into();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let spa = ServeDir::new(&dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health_handler))
        .fallback_service(spa)
        .layer(cors)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "sections": manifest().len(),
    }))
}
