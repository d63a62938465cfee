use serde::{Deserialize, Serialize};

use super::{non_negative_years, require_items, require_text, ValidationError};

/// A candidate profile as submitted under the `candidato` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub cv_text: String,
    pub skills: Vec<String>,
    #[serde(deserialize_with = "non_negative_years")]
    pub years_experience: u32,
    pub education: String,
    pub languages: Vec<String>,
    pub location: String,
    pub has_work_permit: bool,
    #[serde(default)]
    pub sector_experience: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl CandidateProfile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("cv_text", &self.cv_text)?;
        require_items("skills", &self.skills)?;
        require_text("education", &self.education)?;
        require_text("location", &self.location)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate_json() -> serde_json::Value {
        json!({
            "cv_text": "Frontend developer, 4 years of React",
            "skills": ["ReactJS", "TS"],
            "years_experience": 4,
            "education": "Systems Engineering",
            "languages": ["Spanish", "English"],
            "location": "Mexico City",
            "has_work_permit": true
        })
    }

    #[test]
    fn test_valid_candidate() {
        let candidate: CandidateProfile = serde_json::from_value(candidate_json()).unwrap();
        assert!(candidate.validate().is_ok());
        assert!(candidate.sector_experience.is_none());
    }

    #[test]
    fn test_work_permit_flag_is_required() {
        let mut value = candidate_json();
        value.as_object_mut().unwrap().remove("has_work_permit");
        let err = serde_json::from_value::<CandidateProfile>(value).unwrap_err();
        assert!(err.to_string().contains("has_work_permit"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let mut value = candidate_json();
        value["skills"] = json!("React");
        assert!(serde_json::from_value::<CandidateProfile>(value).is_err());
    }

    #[test]
    fn test_blank_skill_fails_validation() {
        let mut value = candidate_json();
        value["skills"] = json!(["React", " "]);
        let candidate: CandidateProfile = serde_json::from_value(value).unwrap();
        assert_eq!(candidate.validate().unwrap_err().field, "skills");
    }

    #[test]
    fn test_blank_location_fails_validation() {
        let mut value = candidate_json();
        value["location"] = json!("");
        let candidate: CandidateProfile = serde_json::from_value(value).unwrap();
        let err = candidate.validate().unwrap_err().within("candidato");
        assert_eq!(err.field, "candidato.location");
    }
}
