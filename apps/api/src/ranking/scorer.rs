//! LLM-backed implementation of the `JobScorer` contract.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::prompts::{JOB_RANK_PROMPT_TEMPLATE, JOB_RANK_SYSTEM};
use super::JobScorer;
use crate::llm_client::LlmClient;
use crate::models::job::{Job, JobScore};
use crate::models::profile::{ExpandedProfile, ProfileRequest};

#[derive(Debug, Deserialize)]
struct BatchRankingResult {
    rankings: Vec<JobScore>,
}

/// Scores job batches via one LLM call per batch.
pub struct LlmScorer {
    llm: LlmClient,
}

impl LlmScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl JobScorer for LlmScorer {
    async fn score_batch(
        &self,
        jobs: &[Job],
        profile: &ProfileRequest,
        expanded: &ExpandedProfile,
    ) -> Result<Vec<JobScore>> {
        let prompt = build_prompt(jobs, profile, expanded);
        let result: BatchRankingResult = self
            .llm
            .complete_json(JOB_RANK_SYSTEM, &prompt)
            .await
            .context("batch scoring call failed")?;
        Ok(result.rankings)
    }
}

fn build_prompt(jobs: &[Job], profile: &ProfileRequest, expanded: &ExpandedProfile) -> String {
    let jobs_text = jobs
        .iter()
        .enumerate()
        .map(|(idx, job)| {
            format!(
                "{}. {} at {} ({})",
                idx + 1,
                job.title,
                job.company,
                job.location.as_deref().unwrap_or("Location not specified")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    JOB_RANK_PROMPT_TEMPLATE
        .replace("{role}", &profile.role)
        .replace("{company}", &profile.company)
        .replace("{company_tier}", &expanded.company_tier)
        .replace(
            "{years_of_experience}",
            &profile.years_of_experience.to_string(),
        )
        .replace("{seniority_level}", &expanded.seniority_level)
        .replace("{skills}", &expanded.inferred_skills.join(", "))
        .replace("{target_titles}", &expanded.target_titles.join(", "))
        .replace("{expected_salary_range}", &expanded.expected_salary_range)
        .replace("{jobs_text}", &jobs_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::Source;

    #[test]
    fn test_build_prompt_lists_jobs_in_order() {
        let jobs = vec![
            Job {
                id: "gh_stripe_1".to_string(),
                title: "Backend Engineer".to_string(),
                company: "Stripe".to_string(),
                location: Some("Bengaluru".to_string()),
                url: String::new(),
                source: Source::Greenhouse,
                posted_date: None,
                description: None,
                salary_min: None,
                salary_max: None,
                required_experience_min: None,
                required_experience_max: None,
            },
            Job {
                id: "lv_vercel_2".to_string(),
                title: "Frontend Engineer".to_string(),
                company: "Vercel".to_string(),
                location: None,
                url: String::new(),
                source: Source::Lever,
                posted_date: None,
                description: None,
                salary_min: None,
                salary_max: None,
                required_experience_min: None,
                required_experience_max: None,
            },
        ];
        let profile = ProfileRequest {
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            years_of_experience: 5,
            skills: None,
            expected_salary: None,
            location: None,
            target_companies: None,
        };
        let expanded = ExpandedProfile {
            original_role: "Engineer".to_string(),
            original_company: "Acme".to_string(),
            years_of_experience: 5,
            inferred_skills: vec!["React".to_string()],
            seniority_level: "mid".to_string(),
            target_titles: vec!["Senior Engineer".to_string()],
            company_tier: "Startup".to_string(),
            expected_salary_range: "Not specified".to_string(),
        };

        let prompt = build_prompt(&jobs, &profile, &expanded);
        assert!(prompt.contains("1. Backend Engineer at Stripe (Bengaluru)"));
        assert!(prompt.contains("2. Frontend Engineer at Vercel (Location not specified)"));
        assert!(prompt.contains("Seniority Level: mid"));
        assert!(!prompt.contains("{jobs_text}"));
    }

    #[test]
    fn test_batch_result_deserializes() {
        let json = r#"{"rankings": [
            {"match_score": 85, "insight": "Solid fit", "match_reasons": ["Title match"]}
        ]}"#;
        let result: BatchRankingResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.rankings.len(), 1);
        assert_eq!(result.rankings[0].match_score, 85);
    }
}
