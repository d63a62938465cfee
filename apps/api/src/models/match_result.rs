use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

use super::ValidationError;

/// Outcome of a match. Serialized with the Spanish labels the API has always
/// exposed; deserialization goes through `FromStr`, so any casing and the
/// English spellings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    #[serde(rename = "APROBADO")]
    Approved,
    #[serde(rename = "RECHAZADO")]
    Rejected,
    #[serde(rename = "PENDIENTE")]
    Pending,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Approved => "APROBADO",
            MatchStatus::Rejected => "RECHAZADO",
            MatchStatus::Pending => "PENDIENTE",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "APROBADO" | "APPROVED" => Ok(MatchStatus::Approved),
            "RECHAZADO" | "REJECTED" => Ok(MatchStatus::Rejected),
            "PENDIENTE" | "PENDING" => Ok(MatchStatus::Pending),
            other => Err(ValidationError::new(
                "status",
                format!("unrecognized status '{other}'"),
            )),
        }
    }
}

impl<'de> Deserialize<'de> for MatchStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|e: ValidationError| D::Error::custom(e.message))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub hard_skills_score: f64,
    pub soft_skills_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// The compatibility assessment returned by `POST /ats/match`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: f64,
    pub status: MatchStatus,
    pub skill_analysis: SkillAnalysis,
    pub experience_score: f64,
    pub compliance_check: BTreeMap<String, bool>,
    pub recommendations: Vec<String>,
    pub summary: String,
    pub detailed_analysis: String,
}

impl MatchResult {
    /// Verifies every score lies in [0, 100].
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_score("match_score", self.match_score)?;
        check_score("experience_score", self.experience_score)?;
        check_score(
            "skill_analysis.hard_skills_score",
            self.skill_analysis.hard_skills_score,
        )?;
        check_score(
            "skill_analysis.soft_skills_score",
            self.skill_analysis.soft_skills_score,
        )?;
        Ok(())
    }

    /// True when no compliance check reports `false`.
    pub fn is_compliant(&self) -> bool {
        self.compliance_check.values().all(|passed| *passed)
    }

    /// Names of the compliance checks that failed, in key order.
    pub fn failed_checks(&self) -> Vec<&str> {
        self.compliance_check
            .iter()
            .filter(|(_, passed)| !**passed)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

fn check_score(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::new(
            field,
            format!("must be between 0 and 100, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(score: f64, checks: &[(&str, bool)]) -> MatchResult {
        MatchResult {
            match_score: score,
            status: MatchStatus::Approved,
            skill_analysis: SkillAnalysis {
                hard_skills_score: 80.0,
                soft_skills_score: 70.0,
                matched_skills: vec!["React".to_string()],
                missing_skills: vec![],
            },
            experience_score: 90.0,
            compliance_check: checks
                .iter()
                .map(|(name, passed)| (name.to_string(), *passed))
                .collect(),
            recommendations: vec![],
            summary: String::new(),
            detailed_analysis: String::new(),
        }
    }

    #[test]
    fn test_status_serde_uses_spanish_labels() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::Approved).unwrap(),
            r#""APROBADO""#
        );
        let status: MatchStatus = serde_json::from_str(r#""RECHAZADO""#).unwrap();
        assert_eq!(status, MatchStatus::Rejected);
    }

    #[test]
    fn test_status_accepts_english_alias() {
        let status: MatchStatus = serde_json::from_str(r#""PENDING""#).unwrap();
        assert_eq!(status, MatchStatus::Pending);
    }

    #[test]
    fn test_status_serde_matches_from_str_casing() {
        for raw in ["Aprobado", "aprobado", " APROBADO ", "Approved"] {
            let via_serde: MatchStatus = serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(via_serde, raw.parse::<MatchStatus>().unwrap(), "input {raw:?}");
        }
        let err = serde_json::from_str::<MatchStatus>(r#""MAYBE""#).unwrap_err();
        assert!(err.to_string().contains("unrecognized status"));
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(serde_json::from_str::<MatchStatus>(r#""MAYBE""#).is_err());
        let err = "maybe".parse::<MatchStatus>().unwrap_err();
        assert_eq!(err.field, "status");
    }

    #[test]
    fn test_status_from_str_is_case_insensitive() {
        assert_eq!("aprobado".parse::<MatchStatus>().unwrap(), MatchStatus::Approved);
        assert_eq!(MatchStatus::Pending.to_string(), "PENDIENTE");
    }

    #[test]
    fn test_score_out_of_range_fails_validation() {
        let err = result_with(120.0, &[]).validate().unwrap_err();
        assert_eq!(err.field, "match_score");
        assert!(result_with(-1.0, &[]).validate().is_err());
        assert!(result_with(f64::NAN, &[]).validate().is_err());
        assert!(result_with(100.0, &[]).validate().is_ok());
    }

    #[test]
    fn test_compliance_helpers() {
        let result = result_with(
            70.0,
            &[("has_work_permit", true), ("location_match", false)],
        );
        assert!(!result.is_compliant());
        assert_eq!(result.failed_checks(), vec!["location_match"]);
        assert!(result_with(70.0, &[("has_work_permit", true)]).is_compliant());
        assert!(result_with(70.0, &[]).is_compliant());
    }
}
