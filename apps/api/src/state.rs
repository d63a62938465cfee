use crate::config::Config;
use crate::matching::orchestrator::MatchOrchestrator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here carries per-request data.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub orchestrator: MatchOrchestrator,
}
