pub mod candidate;
pub mod job;
pub mod match_result;

use serde::{de::Error as _, Deserialize, Deserializer};
use thiserror::Error;

pub use candidate::CandidateProfile;
pub use job::JobPosting;
pub use match_result::{MatchResult, MatchStatus, SkillAnalysis};

/// Raised when an input or output value does not satisfy the domain model.
/// `field` is the dotted path of the offending field.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefixes the field path, e.g. `job_title` → `vacante.job_title`.
    pub fn within(self, parent: &str) -> Self {
        Self {
            field: format!("{parent}.{}", self.field),
            message: self.message,
        }
    }
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn require_items(field: &str, values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::new(field, "must contain at least one entry"));
    }
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::new(field, "entries must not be blank"));
    }
    Ok(())
}

/// Deserializes a year count, rejecting negative numbers with a readable message
/// instead of serde's generic `expected u32`.
pub(crate) fn non_negative_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    if value < 0 {
        return Err(D::Error::custom(format!(
            "must be a non-negative integer, got {value}"
        )));
    }
    u32::try_from(value).map_err(|_| {
        D::Error::custom(format!("out of range, got {value} (max {})", u32::MAX))
    })
}

pub(crate) fn default_true() -> bool {
    true
}
