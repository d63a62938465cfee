//! Match Orchestrator — runs one match end to end.
//!
//! Flow: build_task → gateway.invoke → interpret → work-permit check → compliance override.
//!
//! The compliance override is enforced here regardless of what the engine returned;
//! the engine is instructed to apply the same rule but is not trusted to.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::ReasoningGateway;
use crate::matching::interpreter::interpret;
use crate::matching::prompt_builder::build_task;
use crate::models::{CandidateProfile, JobPosting, MatchResult, MatchStatus};

pub const WORK_PERMIT_CHECK: &str = "has_work_permit";

/// Holds the shared gateway handle. One instance serves every request.
#[derive(Clone)]
pub struct MatchOrchestrator {
    gateway: Arc<dyn ReasoningGateway>,
}

impl MatchOrchestrator {
    pub fn new(gateway: Arc<dyn ReasoningGateway>) -> Self {
        Self { gateway }
    }

    pub fn model(&self) -> &str {
        self.gateway.model()
    }

    /// Matches `candidate` against `job`.
    ///
    /// Errors: `AppError::Gateway` when the reasoning call fails,
    /// `AppError::MalformedResponse` when the reply is JSON of the wrong shape.
    /// Unparseable replies are not errors; they yield the fallback result.
    pub async fn evaluate(
        &self,
        job: &JobPosting,
        candidate: &CandidateProfile,
    ) -> Result<MatchResult, AppError> {
        let task = build_task(job, candidate);

        let raw = self.gateway.invoke(&task).await?;

        let mut result = interpret(&raw, candidate)?;
        enforce_work_permit(job, candidate, &mut result);
        let result = apply_compliance_override(result);

        info!(
            "Match evaluated: status={} score={:.1}",
            result.status, result.match_score
        );
        Ok(result)
    }
}

/// Records a failed work-permit check when the job demands a permit the candidate
/// lacks. This is the one compliance check decidable without the engine.
pub fn enforce_work_permit(job: &JobPosting, candidate: &CandidateProfile, result: &mut MatchResult) {
    if job.work_permit_required && !candidate.has_work_permit {
        result
            .compliance_check
            .insert(WORK_PERMIT_CHECK.to_string(), false);
    }
}

/// Forces score 0 and `Rejected` when any compliance check failed.
pub fn apply_compliance_override(mut result: MatchResult) -> MatchResult {
    if result.is_compliant() {
        return result;
    }

    if result.match_score != 0.0 || result.status != MatchStatus::Rejected {
        warn!(
            "Compliance override: failed checks {:?}, engine reported status={} score={:.1}",
            result.failed_checks(),
            result.status,
            result.match_score
        );
    }

    result.match_score = 0.0;
    result.status = MatchStatus::Rejected;
    result
}
