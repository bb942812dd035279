use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, enabled collaborators and current admission load.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "cheerify",
        "profileSourceEnabled": state.profiles.is_some(),
        "aiEnabled": state.config.gemini_api_key.is_some(),
        "activeRequests": state.gate.active(),
        "maxConcurrentRequests": state.gate.max(),
    }))
}
