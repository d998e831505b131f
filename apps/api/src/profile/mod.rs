//! Profile expansion — turns a minimal candidate profile into search inputs
//! (inferred skills, seniority, target titles) via one LLM call.
//!
//! Expansion is a boundary collaborator: if the call fails the pipeline still
//! runs, using a deterministic heuristic expansion instead. No retries.

pub mod prompts;

use serde::Deserialize;
use tracing::warn;

use crate::llm_client::LlmClient;
use crate::models::profile::{ExpandedProfile, ProfileRequest};
use prompts::{PROFILE_EXPAND_PROMPT_TEMPLATE, PROFILE_EXPAND_SYSTEM};

#[derive(Debug, Deserialize)]
struct ExpansionResult {
    inferred_skills: Vec<String>,
    seniority_level: String,
    target_titles: Vec<String>,
    company_tier: String,
    expected_salary_range: String,
}

/// Expands the profile via the LLM, falling back to heuristics on failure.
pub async fn expand_profile(profile: &ProfileRequest, llm: &LlmClient) -> ExpandedProfile {
    let prompt = build_prompt(profile);
    match llm
        .complete_json::<ExpansionResult>(PROFILE_EXPAND_SYSTEM, &prompt)
        .await
    {
        Ok(expansion) => ExpandedProfile {
            original_role: profile.role.clone(),
            original_company: profile.company.clone(),
            years_of_experience: profile.years_of_experience,
            inferred_skills: expansion.inferred_skills,
            seniority_level: expansion.seniority_level,
            target_titles: expansion.target_titles,
            company_tier: expansion.company_tier,
            expected_salary_range: expansion.expected_salary_range,
        },
        Err(e) => {
            warn!("Profile expansion failed, using heuristic expansion: {e}");
            heuristic_expansion(profile)
        }
    }
}

fn build_prompt(profile: &ProfileRequest) -> String {
    PROFILE_EXPAND_PROMPT_TEMPLATE
        .replace("{role}", &profile.role)
        .replace("{company}", &profile.company)
        .replace(
            "{years_of_experience}",
            &profile.years_of_experience.to_string(),
        )
        .replace(
            "{skills}",
            &profile
                .skills
                .as_deref()
                .unwrap_or_default()
                .join(", "),
        )
        .replace(
            "{expected_salary}",
            &profile
                .expected_salary
                .map(|s| s.to_string())
                .unwrap_or_else(|| "Not specified".to_string()),
        )
        .replace(
            "{location}",
            profile.location.as_deref().unwrap_or("Remote"),
        )
}

/// Deterministic expansion used when the LLM is unavailable.
fn heuristic_expansion(profile: &ProfileRequest) -> ExpandedProfile {
    let seniority_level = match profile.years_of_experience {
        0..=1 => "junior",
        2..=4 => "mid",
        5..=8 => "senior",
        9..=12 => "staff",
        _ => "principal",
    };

    ExpandedProfile {
        original_role: profile.role.clone(),
        original_company: profile.company.clone(),
        years_of_experience: profile.years_of_experience,
        inferred_skills: profile.skills.clone().unwrap_or_default(),
        seniority_level: seniority_level.to_string(),
        target_titles: vec![profile.role.clone()],
        company_tier: "Unknown".to_string(),
        expected_salary_range: profile
            .expected_salary
            .map(|s| format!("${s}+"))
            .unwrap_or_else(|| "Not specified".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(years: u8) -> ProfileRequest {
        ProfileRequest {
            role: "Frontend Engineer".to_string(),
            company: "Google".to_string(),
            years_of_experience: years,
            skills: Some(vec!["React".to_string(), "TypeScript".to_string()]),
            expected_salary: Some(200_000),
            location: Some("Bengaluru".to_string()),
            target_companies: None,
        }
    }

    #[test]
    fn test_heuristic_expansion_seniority_buckets() {
        assert_eq!(heuristic_expansion(&profile(1)).seniority_level, "junior");
        assert_eq!(heuristic_expansion(&profile(3)).seniority_level, "mid");
        assert_eq!(heuristic_expansion(&profile(6)).seniority_level, "senior");
        assert_eq!(heuristic_expansion(&profile(10)).seniority_level, "staff");
        assert_eq!(heuristic_expansion(&profile(20)).seniority_level, "principal");
    }

    #[test]
    fn test_heuristic_expansion_carries_profile_fields() {
        let expanded = heuristic_expansion(&profile(5));
        assert_eq!(expanded.original_role, "Frontend Engineer");
        assert_eq!(expanded.target_titles, vec!["Frontend Engineer".to_string()]);
        assert_eq!(expanded.inferred_skills.len(), 2);
        assert_eq!(expanded.expected_salary_range, "$200000+");
    }

    #[test]
    fn test_build_prompt_fills_placeholders() {
        let prompt = build_prompt(&profile(5));
        assert!(prompt.contains("Frontend Engineer"));
        assert!(prompt.contains("React, TypeScript"));
        assert!(!prompt.contains("{role}"));
        assert!(!prompt.contains("{skills}"));
    }

    #[test]
    fn test_expansion_result_deserializes() {
        let json = r#"{
            "inferred_skills": ["React", "JavaScript"],
            "seniority_level": "senior",
            "target_titles": ["Senior Frontend Engineer", "Frontend Engineer"],
            "company_tier": "FAANG",
            "expected_salary_range": "$180k-$250k"
        }"#;
        let result: ExpansionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.seniority_level, "senior");
        assert_eq!(result.target_titles.len(), 2);
    }
}
