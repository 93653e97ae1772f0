// GET handlers: version, health

use axum::{extract::State, response::IntoResponse};

use super::AppState;
use crate::version::{NAME, VERSION};

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /health: same payload as the health_check tool.
pub(super) async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.tools.health())
}
