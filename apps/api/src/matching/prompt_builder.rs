//! Prompt Builder — turns a (job, candidate) pair into the task text sent to the
//! reasoning engine.
//!
//! Pure and deterministic: identical inputs always yield byte-identical output.
//! All free text reaches the document through `serde_json`, so quotes, braces and
//! newlines in user input cannot break the data block.

use serde::Serialize;

use crate::matching::prompts::{
    COMPLIANCE_SECTION, FLEXIBLE, GENERAL, MATCHING_SECTION, NOT_APPLICABLE, NOT_SPECIFIED,
    OUTPUT_FORMAT_SECTION, ROLE_SECTION,
};
use crate::models::{CandidateProfile, JobPosting};

/// Job fields in the order the engine sees them.
#[derive(Serialize)]
struct JobBlock<'a> {
    title: &'a str,
    description: &'a str,
    required_hard_skills: &'a [String],
    desired_soft_skills: &'a [String],
    required_years_experience: u32,
    education: &'a str,
    languages: &'a [String],
    required_location: &'a str,
    work_permit_required: bool,
    sector: &'a str,
}

#[derive(Serialize)]
struct CandidateBlock<'a> {
    full_cv: &'a str,
    skills: &'a [String],
    years_experience: u32,
    education: &'a str,
    languages: &'a [String],
    current_location: &'a str,
    has_work_permit: bool,
    sector_experience: &'a str,
    additional_info: &'a str,
}

impl<'a> From<&'a JobPosting> for JobBlock<'a> {
    fn from(job: &'a JobPosting) -> Self {
        Self {
            title: &job.job_title,
            description: &job.job_description,
            required_hard_skills: &job.hard_skills,
            desired_soft_skills: job.soft_skills.as_deref().unwrap_or_default(),
            required_years_experience: job.years_experience,
            education: job.education.as_deref().unwrap_or(NOT_SPECIFIED),
            languages: job.languages.as_deref().unwrap_or_default(),
            required_location: job.location_required.as_deref().unwrap_or(FLEXIBLE),
            work_permit_required: job.work_permit_required,
            sector: job.sector.as_deref().unwrap_or(GENERAL),
        }
    }
}

impl<'a> From<&'a CandidateProfile> for CandidateBlock<'a> {
    fn from(candidate: &'a CandidateProfile) -> Self {
        Self {
            full_cv: &candidate.cv_text,
            skills: &candidate.skills,
            years_experience: candidate.years_experience,
            education: &candidate.education,
            languages: &candidate.languages,
            current_location: &candidate.location,
            has_work_permit: candidate.has_work_permit,
            sector_experience: candidate
                .sector_experience
                .as_deref()
                .unwrap_or(NOT_SPECIFIED),
            additional_info: candidate.additional_info.as_deref().unwrap_or(NOT_APPLICABLE),
        }
    }
}

/// Builds the full task description for one match.
///
/// Sections, in order: role + anonymization, compliance gate, matching method,
/// data block, output contract.
pub fn build_task(job: &JobPosting, candidate: &CandidateProfile) -> String {
    let sections = [
        ROLE_SECTION.to_string(),
        compliance_section(job),
        MATCHING_SECTION.to_string(),
        data_section(job, candidate),
        OUTPUT_FORMAT_SECTION.to_string(),
    ];
    sections.join("\n\n---\n\n")
}

fn compliance_section(job: &JobPosting) -> String {
    let permit = if job.work_permit_required {
        "REQUIRED"
    } else {
        "not required"
    };
    let location = quoted(job.location_required.as_deref().unwrap_or(NOT_SPECIFIED));
    let education = quoted(job.education.as_deref().unwrap_or(NOT_SPECIFIED));

    format!(
        "{COMPLIANCE_SECTION}\n\
         - Work permit: {permit}\n\
         - Required location: {location}\n\
         - Minimum education: {education}"
    )
}

fn data_section(job: &JobPosting, candidate: &CandidateProfile) -> String {
    format!(
        "### JOB POSTING DATA:\n```json\n{}\n```\n\n### CANDIDATE DATA:\n```json\n{}\n```",
        json_block(&JobBlock::from(job)),
        json_block(&CandidateBlock::from(candidate)),
    )
}

/// Pretty JSON for a data block. The blocks hold only strings, integers and
/// booleans, which always serialize.
fn json_block<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// A JSON string literal, so requirement lines cannot inject new lines or sections.
fn quoted(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_default()
}
