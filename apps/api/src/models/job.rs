use serde::{Deserialize, Serialize};

use super::{default_true, non_negative_years, require_items, require_text, ValidationError};

/// A job posting as submitted under the `vacante` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_title: String,
    pub job_description: String,
    pub hard_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Option<Vec<String>>,
    #[serde(deserialize_with = "non_negative_years")]
    pub years_experience: u32,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub location_required: Option<String>,
    #[serde(default = "default_true")]
    pub work_permit_required: bool,
    #[serde(default)]
    pub sector: Option<String>,
}

impl JobPosting {
    /// Checks the constraints serde cannot express: non-blank text and a
    /// non-empty hard skill list.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("job_title", &self.job_title)?;
        require_text("job_description", &self.job_description)?;
        require_items("hard_skills", &self.hard_skills)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_job() -> serde_json::Value {
        json!({
            "job_title": "Frontend Developer",
            "job_description": "React and TypeScript",
            "hard_skills": ["React", "TypeScript"],
            "years_experience": 3
        })
    }

    #[test]
    fn test_optional_fields_default() {
        let job: JobPosting = serde_json::from_value(minimal_job()).unwrap();
        assert!(job.soft_skills.is_none());
        assert!(job.education.is_none());
        assert!(job.languages.is_none());
        assert!(job.location_required.is_none());
        assert!(job.sector.is_none());
        assert!(job.work_permit_required, "work permit defaults to required");
        assert!(job.validate().is_ok());
    }

    #[test]
    fn test_negative_years_rejected() {
        let mut value = minimal_job();
        value["years_experience"] = json!(-2);
        let err = serde_json::from_value::<JobPosting>(value).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_years_above_u32_max_reported_out_of_range() {
        let mut value = minimal_job();
        value["years_experience"] = json!(5_000_000_000_i64);
        let message = serde_json::from_value::<JobPosting>(value)
            .unwrap_err()
            .to_string();
        assert!(message.contains("out of range"), "{message}");
        assert!(!message.contains("non-negative"), "{message}");
    }

    #[test]
    fn test_missing_title_rejected() {
        let mut value = minimal_job();
        value.as_object_mut().unwrap().remove("job_title");
        let err = serde_json::from_value::<JobPosting>(value).unwrap_err();
        assert!(err.to_string().contains("job_title"));
    }

    #[test]
    fn test_empty_hard_skills_fail_validation() {
        let mut value = minimal_job();
        value["hard_skills"] = json!([]);
        let job: JobPosting = serde_json::from_value(value).unwrap();
        let err = job.validate().unwrap_err();
        assert_eq!(err.field, "hard_skills");
    }

    #[test]
    fn test_blank_description_fails_validation() {
        let mut value = minimal_job();
        value["job_description"] = json!("   ");
        let job: JobPosting = serde_json::from_value(value).unwrap();
        assert_eq!(job.validate().unwrap_err().field, "job_description");
    }
}
