//! Candidate profile request/response types for the analyze endpoint.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::RankedJob;

/// Candidate profile submitted to `POST /api/v1/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub role: String,
    pub company: String,
    pub years_of_experience: u8,
    pub skills: Option<Vec<String>>,
    /// Expected salary in USD.
    pub expected_salary: Option<u32>,
    #[serde(default = "default_location")]
    pub location: Option<String>,
    /// Explicit board slugs to search instead of the full registry.
    pub target_companies: Option<Vec<String>>,
}

fn default_location() -> Option<String> {
    Some("Remote".to_string())
}

impl ProfileRequest {
    /// Rejects malformed profiles before they reach the pipeline.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.role.trim().is_empty() {
            return Err(AppError::Validation("role cannot be empty".to_string()));
        }
        if self.company.trim().is_empty() {
            return Err(AppError::Validation("company cannot be empty".to_string()));
        }
        if self.years_of_experience > 50 {
            return Err(AppError::Validation(
                "years_of_experience must be between 0 and 50".to_string(),
            ));
        }
        Ok(())
    }
}

/// Profile enriched by the expansion collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandedProfile {
    pub original_role: String,
    pub original_company: String,
    pub years_of_experience: u8,
    pub inferred_skills: Vec<String>,
    pub seniority_level: String,
    pub target_titles: Vec<String>,
    pub company_tier: String,
    pub expected_salary_range: String,
}

/// Final response of the analyze endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub profile: ExpandedProfile,
    pub jobs: Vec<RankedJob>,
    pub total_jobs: usize,
    pub companies_searched: Vec<String>,
}

/// Company registry grouped by source, for `GET /api/v1/companies`.
#[derive(Debug, Clone, Serialize)]
pub struct CompaniesResponse {
    pub greenhouse: Vec<&'static str>,
    pub lever: Vec<&'static str>,
}
