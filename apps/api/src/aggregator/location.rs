//! Location normalization, filtering, and the priority-tier sort.

use std::collections::HashSet;

use crate::models::job::{Job, RankedJob};
use crate::registry::{
    EUROPE_TERMS, INDIA_METROS, INDIA_TERMS, LOCATION_ALIASES, REMOTE_TERMS, US_TERMS,
};

/// Tier assigned to jobs whose location matches nothing known.
const TIER_OTHER: u8 = 6;

/// Whether the preferred location is itself a remote synonym.
pub fn is_remote_query(preferred: &str) -> bool {
    matches!(
        preferred.to_lowercase().trim(),
        "remote" | "anywhere" | "wfh" | "work from home"
    )
}

/// Expands a preferred location into the set of strings it matches against.
/// An Indian metro also implies "india"; an unrecognized input matches itself.
pub fn match_terms(preferred: &str) -> HashSet<String> {
    let preferred = preferred.to_lowercase().trim().to_string();
    let mut terms = HashSet::new();

    for (canonical, aliases) in LOCATION_ALIASES {
        if aliases.iter().any(|alias| preferred.contains(alias)) {
            terms.extend(aliases.iter().map(|a| a.to_string()));
            if INDIA_METROS.contains(canonical) {
                terms.insert("india".to_string());
            }
        }
    }

    if terms.is_empty() {
        terms.insert(preferred);
    }
    terms
}

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}

fn contains_any_owned(haystack: &str, terms: &HashSet<String>) -> bool {
    terms.iter().any(|term| haystack.contains(term.as_str()))
}

/// Keeps jobs compatible with the preferred location. A remote-only query
/// keeps only remote (or unlocated) jobs; otherwise preferred-location,
/// remote, and unlocated jobs all pass — an unknown location is assumed
/// acceptable.
pub fn filter_by_location(jobs: Vec<Job>, preferred: &str) -> Vec<Job> {
    let remote_only = is_remote_query(preferred);
    let terms = match_terms(preferred);

    jobs.into_iter()
        .filter(|job| {
            let location = job
                .location
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            let is_remote = contains_any(&location, REMOTE_TERMS);
            let no_location = location.trim().is_empty();

            if remote_only {
                is_remote || no_location
            } else {
                contains_any_owned(&location, &terms) || is_remote || no_location
            }
        })
        .collect()
}

/// Priority tier of a job location: 0 preferred, 1 India, 2 Europe, 3 US,
/// 4 remote, 5 unlocated, 6 other.
pub fn location_tier(location: Option<&str>, preferred_terms: &HashSet<String>) -> u8 {
    let location = location.unwrap_or_default().to_lowercase();

    if contains_any_owned(&location, preferred_terms) {
        0
    } else if contains_any(&location, INDIA_TERMS) {
        1
    } else if contains_any(&location, EUROPE_TERMS) {
        2
    } else if contains_any(&location, US_TERMS) {
        3
    } else if contains_any(&location, REMOTE_TERMS) {
        4
    } else if location.trim().is_empty() {
        5
    } else {
        TIER_OTHER
    }
}

/// Stable sort by ascending location tier; ties keep their relative order.
pub fn sort_by_location_tier(jobs: &mut [Job], preferred: &str) {
    let terms = match_terms(preferred);
    jobs.sort_by_key(|job| location_tier(job.location.as_deref(), &terms));
}

/// Post-ranking sort: location tier ascending, then match score descending.
pub fn sort_ranked_by_location_and_score(jobs: &mut [RankedJob], preferred: &str) {
    let terms = match_terms(preferred);
    jobs.sort_by(|a, b| {
        let tier_a = location_tier(a.job.location.as_deref(), &terms);
        let tier_b = location_tier(b.job.location.as_deref(), &terms);
        tier_a
            .cmp(&tier_b)
            .then_with(|| b.match_score.cmp(&a.match_score))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{JobScore, Source};

    fn job(id: &str, location: Option<&str>) -> Job {
        Job {
            id: id.to_string(),
            title: "Software Engineer".to_string(),
            company: "Acme".to_string(),
            location: location.map(str::to_string),
            url: String::new(),
            source: Source::Greenhouse,
            posted_date: None,
            description: None,
            salary_min: None,
            salary_max: None,
            required_experience_min: None,
            required_experience_max: None,
        }
    }

    #[test]
    fn test_match_terms_expands_aliases() {
        let terms = match_terms("Bengaluru");
        assert!(terms.contains("bangalore"));
        assert!(terms.contains("blr"));
        // Indian metro implies the whole country
        assert!(terms.contains("india"));
    }

    #[test]
    fn test_match_terms_unknown_location_matches_itself() {
        let terms = match_terms("Reykjavik");
        assert_eq!(terms.len(), 1);
        assert!(terms.contains("reykjavik"));
    }

    #[test]
    fn test_remote_query_detection() {
        assert!(is_remote_query("Remote"));
        assert!(is_remote_query("  wfh "));
        assert!(!is_remote_query("Bengaluru"));
    }

    #[test]
    fn test_filter_keeps_preferred_remote_and_unlocated() {
        let jobs = vec![
            job("a", Some("Bengaluru, India")),
            job("b", Some("Berlin, Germany")),
            job("c", Some("Remote - Anywhere")),
            job("d", None),
        ];
        let kept = filter_by_location(jobs, "Bengaluru");
        let ids: Vec<&str> = kept.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remote_only_filter() {
        let jobs = vec![
            job("a", Some("Bengaluru, India")),
            job("b", Some("Remote")),
            job("c", None),
        ];
        let kept = filter_by_location(jobs, "Remote");
        let ids: Vec<&str> = kept.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_location_tiers() {
        let terms = match_terms("Bengaluru");
        assert_eq!(location_tier(Some("Bengaluru, India"), &terms), 0);
        assert_eq!(location_tier(Some("Mumbai, India"), &terms), 0); // via "india"
        assert_eq!(location_tier(Some("Berlin"), &terms), 2);
        assert_eq!(location_tier(Some("New York"), &terms), 3);
        assert_eq!(location_tier(Some("Distributed"), &terms), 4);
        assert_eq!(location_tier(None, &terms), 5);
        assert_eq!(location_tier(Some("Tokyo"), &terms), 6);
    }

    #[test]
    fn test_sort_is_stable_within_tier() {
        let mut jobs = vec![
            job("tokyo", Some("Tokyo")),
            job("blr1", Some("Bengaluru")),
            job("berlin", Some("Berlin")),
            job("blr2", Some("Bangalore")),
        ];
        sort_by_location_tier(&mut jobs, "Bengaluru");
        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["blr1", "blr2", "berlin", "tokyo"]);
    }

    #[test]
    fn test_ranked_sort_tier_then_score() {
        let ranked = |id: &str, location: &str, score: u8| RankedJob::from_score(
            job(id, Some(location)),
            JobScore {
                match_score: score,
                insight: String::new(),
                match_reasons: vec![],
            },
        );
        let mut jobs = vec![
            ranked("berlin-high", "Berlin", 95),
            ranked("blr-low", "Bengaluru", 40),
            ranked("blr-high", "Bangalore", 80),
        ];
        sort_ranked_by_location_and_score(&mut jobs, "Bengaluru");
        let ids: Vec<&str> = jobs.iter().map(|j| j.job.id.as_str()).collect();
        // preferred tier first regardless of raw score, score descending within tier
        assert_eq!(ids, vec!["blr-high", "blr-low", "berlin-high"]);
    }
}
