use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app_name: String,
    pub version: &'static str,
}

/// GET /
/// Returns a simple status object with service name and version.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        app_name: state.config.app_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
