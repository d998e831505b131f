//! Search orchestration and result composition.
//!
//! Workflow: expand profile → aggregate + filter jobs → rank → compose the
//! final response (salary filter, then location-tier + score ordering).

pub mod handlers;

use tracing::info;

use crate::aggregator::location;
use crate::models::job::RankedJob;
use crate::models::profile::{AnalyzeResponse, ExpandedProfile, ProfileRequest};
use crate::profile::expand_profile;
use crate::ranking::rank_jobs;
use crate::state::AppState;

/// Runs the full analysis pipeline for one candidate profile.
pub async fn run_analysis(state: &AppState, profile: ProfileRequest) -> AnalyzeResponse {
    let expanded = expand_profile(&profile, &state.llm).await;
    info!(
        "Expanded profile: seniority={}, {} target titles",
        expanded.seniority_level,
        expanded.target_titles.len()
    );

    let (jobs, companies_searched) = state
        .aggregator
        .fetch_all_jobs(
            profile.target_companies.as_deref(),
            Some(&expanded.target_titles),
            profile.location.as_deref(),
            Some(profile.years_of_experience),
            Some(&expanded.seniority_level),
        )
        .await;

    let ranked = rank_jobs(state.scorer.as_ref(), jobs, &profile, &expanded).await;

    compose_response(
        expanded,
        ranked,
        companies_searched,
        profile.location.as_deref(),
        profile.expected_salary,
    )
}

/// Drops ranked jobs whose stated maximum salary falls below the candidate's
/// expectation. Jobs without salary data always pass.
pub fn apply_salary_filter(
    jobs: Vec<RankedJob>,
    expected_salary: Option<u32>,
) -> Vec<RankedJob> {
    let Some(expected) = expected_salary else {
        return jobs;
    };
    jobs.into_iter()
        .filter(|ranked| match ranked.job.salary_max {
            Some(max) => max >= expected,
            None => true,
        })
        .collect()
}

/// Final composition: salary filter, then (location tier asc, score desc)
/// ordering when a preferred location exists.
pub fn compose_response(
    profile: ExpandedProfile,
    ranked: Vec<RankedJob>,
    companies_searched: Vec<String>,
    preferred_location: Option<&str>,
    expected_salary: Option<u32>,
) -> AnalyzeResponse {
    let mut jobs = apply_salary_filter(ranked, expected_salary);

    if let Some(preferred) = preferred_location {
        location::sort_ranked_by_location_and_score(&mut jobs, preferred);
    }

    AnalyzeResponse {
        profile,
        total_jobs: jobs.len(),
        companies_searched,
        jobs,
    }
}
