//! Axum route handlers for the ATS API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::ATS_SYSTEM_INSTRUCTIONS;
use crate::models::{CandidateProfile, JobPosting, MatchResult, ValidationError};
use crate::state::AppState;

const SYSTEM_NAME: &str = "ATS Simulator with Semantic Analysis";

const CAPABILITIES: &[&str] = &[
    "Semantic skill analysis",
    "Automatic compliance checking",
    "Weighted scoring (Hard Skills 50%, Experience 30%, Soft Skills 20%)",
    "PII anonymization",
    "Personalized recommendations",
];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub vacante: JobPosting,
    pub candidato: CandidateProfile,
}

impl MatchRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.vacante.validate().map_err(|e| e.within("vacante"))?;
        self.candidato.validate().map_err(|e| e.within("candidato"))?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct AtsInfoResponse {
    pub system_name: &'static str,
    pub version: &'static str,
    pub capabilities: Vec<&'static str>,
    pub instructions: &'static str,
    pub tools: Vec<&'static str>,
    pub model: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /ats/info
///
/// Static descriptor of the matching engine.
pub async fn handle_ats_info(State(state): State<AppState>) -> Json<AtsInfoResponse> {
    Json(AtsInfoResponse {
        system_name: SYSTEM_NAME,
        version: env!("CARGO_PKG_VERSION"),
        capabilities: CAPABILITIES.to_vec(),
        instructions: ATS_SYSTEM_INSTRUCTIONS,
        tools: vec!["groq-chat-completions"],
        model: state.orchestrator.model().to_string(),
    })
}

/// POST /ats/match
///
/// Matches the candidate against the job posting. Body rejections (missing field,
/// wrong type, negative years) are reported as 400 rather than axum's default 422.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    request.validate()?;

    info!("Processing ATS match for: {}", request.vacante.job_title);

    let result = state
        .orchestrator
        .evaluate(&request.vacante, &request.candidato)
        .await?;

    info!("Match completed - score: {:.1}%", result.match_score);

    Ok(Json(result))
}
