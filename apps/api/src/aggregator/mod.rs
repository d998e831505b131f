//! Job Aggregator — fans out fetches across every configured company, then
//! runs the filter pipeline: keyword → location → experience → dedup →
//! location-tier sort.

pub mod filters;
pub mod location;

use tracing::{debug, info};

use crate::models::job::Job;
use crate::models::profile::CompaniesResponse;
use crate::registry::{GREENHOUSE_COMPANIES, LEVER_COMPANIES};
use crate::sources::{GreenhouseClient, LeverClient, SourceClient};

/// Aggregates jobs from all sources and applies the filter pipeline.
///
/// Owns the source clients (and their HTTP connection pools); dropping the
/// aggregator releases them.
pub struct JobAggregator {
    greenhouse: GreenhouseClient,
    lever: LeverClient,
}

impl JobAggregator {
    pub fn new() -> Self {
        Self {
            greenhouse: GreenhouseClient::new(),
            lever: LeverClient::new(),
        }
    }

    /// Fetches and filters jobs across both sources.
    ///
    /// Returns the surviving jobs and every company that was searched —
    /// the searched list reflects the selected set regardless of whether a
    /// company yielded jobs or its fetch failed.
    pub async fn fetch_all_jobs(
        &self,
        target_companies: Option<&[String]>,
        keywords: Option<&[String]>,
        location: Option<&str>,
        years_of_experience: Option<u8>,
        seniority_level: Option<&str>,
    ) -> (Vec<Job>, Vec<String>) {
        let (gh_companies, lv_companies) = select_companies(target_companies);
        info!(
            "Searching {} Greenhouse and {} Lever boards",
            gh_companies.len(),
            lv_companies.len()
        );

        // the two sources run concurrently; each fans out per company
        let (gh_jobs, lv_jobs) = tokio::join!(
            self.greenhouse.fetch(&gh_companies),
            self.lever.fetch(&lv_companies)
        );

        let mut jobs: Vec<Job> = gh_jobs;
        jobs.extend(lv_jobs);
        debug!("Fetched {} raw postings", jobs.len());

        let mut companies_searched = gh_companies;
        companies_searched.extend(lv_companies);

        if let Some(keywords) = keywords {
            jobs = filters::filter_by_keywords(jobs, keywords);
            debug!("After keyword filter: {}", jobs.len());
        }

        if let Some(location) = location {
            jobs = location::filter_by_location(jobs, location);
            debug!("After location filter: {}", jobs.len());
        }

        if years_of_experience.is_some() || seniority_level.is_some() {
            jobs = filters::filter_by_experience(jobs, years_of_experience, seniority_level);
            debug!("After experience filter: {}", jobs.len());
        }

        jobs = filters::deduplicate(jobs);

        if let Some(location) = location {
            location::sort_by_location_tier(&mut jobs, location);
        }

        info!("Aggregation produced {} jobs", jobs.len());
        (jobs, companies_searched)
    }

    /// The full registry grouped by source.
    pub fn available_companies() -> CompaniesResponse {
        CompaniesResponse {
            greenhouse: GREENHOUSE_COMPANIES.clone(),
            lever: LEVER_COMPANIES.clone(),
        }
    }
}

impl Default for JobAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects company slugs per source: the case-insensitive intersection with
/// the registry when explicit targets are given, the full registry otherwise.
/// Registry order (priority tiers) is preserved either way.
fn select_companies(target_companies: Option<&[String]>) -> (Vec<String>, Vec<String>) {
    match target_companies {
        Some(targets) if !targets.is_empty() => {
            let targets: Vec<String> = targets.iter().map(|t| t.to_lowercase()).collect();
            let keep = |registry: &[&str]| {
                registry
                    .iter()
                    .filter(|slug| targets.contains(&slug.to_lowercase()))
                    .map(|slug| slug.to_string())
                    .collect::<Vec<_>>()
            };
            (keep(&GREENHOUSE_COMPANIES), keep(&LEVER_COMPANIES))
        }
        _ => (
            GREENHOUSE_COMPANIES.iter().map(|s| s.to_string()).collect(),
            LEVER_COMPANIES.iter().map(|s| s.to_string()).collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_companies_defaults_to_full_registry() {
        let (gh, lv) = select_companies(None);
        assert_eq!(gh.len(), GREENHOUSE_COMPANIES.len());
        assert_eq!(lv.len(), LEVER_COMPANIES.len());
        assert_eq!(gh[0], "google");
    }

    #[test]
    fn test_select_companies_intersects_case_insensitively() {
        let targets = vec![
            "Stripe".to_string(),
            "VERCEL".to_string(),
            "not-a-board".to_string(),
        ];
        let (gh, lv) = select_companies(Some(&targets));
        assert_eq!(gh, vec!["stripe".to_string()]);
        assert_eq!(lv, vec!["vercel".to_string()]);
    }

    #[test]
    fn test_select_companies_preserves_registry_order() {
        // pass targets in reverse registry order; output follows the registry
        let targets = vec!["razorpay".to_string(), "google".to_string()];
        let (gh, _) = select_companies(Some(&targets));
        assert_eq!(gh, vec!["google".to_string(), "razorpay".to_string()]);
    }
}
