//! Response Interpreter — turns the reasoning engine's free-form reply into a
//! typed `MatchResult`.
//!
//! Two failure outcomes:
//! - no JSON object recoverable → deterministic fallback result (not an error)
//! - a JSON object that violates the `MatchResult` shape → `MalformedResponseError`

use std::collections::{BTreeMap, HashSet};

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::models::{CandidateProfile, MatchResult, MatchStatus, SkillAnalysis};

pub const FALLBACK_RECOMMENDATION: &str = "Automatic processing of the analysis failed";
pub const FALLBACK_SUMMARY: &str = "An error occurred while processing the matching engine response";

/// The engine produced a JSON object, but not one shaped like a `MatchResult`.
#[derive(Debug, Error)]
pub enum MalformedResponseError {
    #[error("response does not match the result shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("response field out of range: {0}")]
    OutOfRange(#[from] crate::models::ValidationError),
}

/// Interprets raw engine output for `candidate`.
pub fn interpret(
    raw: &str,
    candidate: &CandidateProfile,
) -> Result<MatchResult, MalformedResponseError> {
    let Some(object) = decode_object(raw) else {
        warn!(
            "No JSON object found in reasoning output ({} chars); using fallback result",
            raw.len()
        );
        return Ok(fallback_result(raw, candidate));
    };

    let mut result: MatchResult = serde_json::from_value(object)?;
    result.validate()?;
    normalize_skills(&mut result.skill_analysis);
    Ok(result)
}

/// Recovers a JSON object from `raw`: first the greedy `{ ... }` span, then the
/// whole text. Values that parse but are not objects count as failures.
fn decode_object(raw: &str) -> Option<Value> {
    let parse = |text: &str| match serde_json::from_str::<Value>(text) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    };

    outer_braces(raw).and_then(parse).or_else(|| parse(raw))
}

/// Slice from the first `{` to the last `}` inclusive.
fn outer_braces(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// The safe default returned when the engine's output cannot be decoded.
/// Location and education are reported as unmatched since nothing was evaluated.
pub fn fallback_result(raw: &str, candidate: &CandidateProfile) -> MatchResult {
    let compliance_check = BTreeMap::from([
        ("has_work_permit".to_string(), candidate.has_work_permit),
        ("location_match".to_string(), false),
        ("education_match".to_string(), false),
    ]);

    MatchResult {
        match_score: 0.0,
        status: MatchStatus::Pending,
        skill_analysis: SkillAnalysis {
            hard_skills_score: 0.0,
            soft_skills_score: 0.0,
            matched_skills: vec![],
            missing_skills: vec![],
        },
        experience_score: 0.0,
        compliance_check,
        recommendations: vec![FALLBACK_RECOMMENDATION.to_string()],
        summary: FALLBACK_SUMMARY.to_string(),
        detailed_analysis: raw.to_string(),
    }
}

/// De-duplicates both skill lists and drops from `missing_skills` anything already
/// matched. Comparison ignores case and surrounding whitespace.
fn normalize_skills(analysis: &mut SkillAnalysis) {
    let key = |s: &str| s.trim().to_lowercase();

    let mut seen = HashSet::new();
    analysis.matched_skills.retain(|s| seen.insert(key(s)));

    let before = analysis.missing_skills.len();
    let mut seen_missing = HashSet::new();
    analysis
        .missing_skills
        .retain(|s| !seen.contains(&key(s)) && seen_missing.insert(key(s)));

    if analysis.missing_skills.len() != before {
        warn!(
            "Dropped {} duplicate or overlapping entries from missing_skills",
            before - analysis.missing_skills.len()
        );
    }
}
