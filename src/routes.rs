use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tracing::warn;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    let mut router = Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Action endpoints, one per button
        .route("/api/languages", get(handlers::languages))
        .route("/api/translate", post(handlers::translate))
        .route("/api/listen", post(handlers::listen))
        .route("/api/speak", post(handlers::speak));

    // Background image comes from configuration rather than a path baked
    // into the page.
    if let Some(bg) = &system_config.background_image {
        if Path::new(bg).is_file() {
            router = router.route_service("/bg", ServeFile::new(bg));
        } else {
            warn!("Background image not found at {}", bg);
        }
    }

    // Static frontend
    router.fallback_service(ServeDir::new(&system_config.static_dir))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "listening": state.capture.is_recording(),
    }))
}
