pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

fn ats_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/ats/info", get(handlers::handle_ats_info))
        .route("/ats/match", post(handlers::handle_match))
}

/// Routes are served at the root and, for existing clients, under `/api/v1`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(ats_routes())
        .nest("/api/v1", ats_routes())
        .with_state(state)
}
