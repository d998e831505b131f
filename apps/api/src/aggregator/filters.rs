//! Title-based keyword and experience filters, plus deduplication.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::experience;
use crate::models::job::Job;
use crate::registry::{
    seniority_level_keywords, EXCLUDE_TERMS, GENERIC_ENGINEERING_TERMS, SENIORITY_KEYWORDS,
    SOFTWARE_TERMS, STOP_WORDS,
};

/// Experience-filter buffer: jobs may require up to this many more years than
/// the candidate has.
const EXPERIENCE_BUFFER_YEARS: u8 = 1;

static WORD_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,/\-]+").expect("invalid word split"));

/// Tokenizes keywords into lowercase words, dropping stop words and tokens of
/// length <= 2.
pub fn keyword_words(keywords: &[String]) -> HashSet<String> {
    let mut words = HashSet::new();
    for keyword in keywords {
        for word in WORD_SPLIT.split(&keyword.to_lowercase()) {
            if word.len() > 2 && !STOP_WORDS.contains(&word) {
                words.insert(word.to_string());
            }
        }
    }
    words
}

/// Software-focused keyword filter. A job survives iff its title carries no
/// excluded non-software term, is software-related, and either shares a word
/// with the keyword set or is a generic engineering role
/// (engineer/developer/sde/swe/programmer).
pub fn filter_by_keywords(jobs: Vec<Job>, keywords: &[String]) -> Vec<Job> {
    if keywords.is_empty() {
        return jobs;
    }

    let words = keyword_words(keywords);

    jobs.into_iter()
        .filter(|job| {
            let title = job.title.to_lowercase();

            if EXCLUDE_TERMS.iter().any(|term| title.contains(term)) {
                return false;
            }

            let is_software_related = SOFTWARE_TERMS.iter().any(|term| title.contains(term));

            let title_words: HashSet<&str> = WORD_SPLIT.split(&title).collect();
            let has_keyword_match = words.iter().any(|w| title_words.contains(w.as_str()));

            if has_keyword_match && is_software_related {
                return true;
            }
            // generic software roles pass without keyword overlap
            is_software_related
                && GENERIC_ENGINEERING_TERMS
                    .iter()
                    .any(|term| title.contains(term))
        })
        .collect()
}

/// Experience filter. Jobs with extracted requirements are decided solely by
/// `is_experience_match`; the rest fall back to title-level heuristics.
pub fn filter_by_experience(
    jobs: Vec<Job>,
    years_of_experience: Option<u8>,
    seniority_level: Option<&str>,
) -> Vec<Job> {
    if years_of_experience.is_none() && seniority_level.is_none() {
        return jobs;
    }

    let user_years = years_of_experience.unwrap_or(0);

    let mut appropriate_levels: HashSet<&str> = HashSet::new();
    if let Some(years) = years_of_experience {
        let levels: &[&str] = match years {
            0..=1 => &["intern", "junior"],
            2..=3 => &["junior", "mid"],
            4..=5 => &["mid", "senior"],
            6..=8 => &["senior", "staff"],
            _ => &["senior", "staff", "manager"],
        };
        appropriate_levels.extend(levels);
    }
    if let Some(level) = seniority_level {
        let level = level.to_lowercase();
        for (name, keywords) in SENIORITY_KEYWORDS {
            if keywords.iter().any(|kw| level.contains(kw)) {
                appropriate_levels.insert(*name);
            }
        }
    }

    let valid_keywords: HashSet<&str> = appropriate_levels
        .iter()
        .flat_map(|&level| seniority_level_keywords(level).iter().copied())
        .collect();

    let mut too_senior_keywords: HashSet<&str> = HashSet::new();
    if let Some(years) = years_of_experience {
        if years < 7 {
            too_senior_keywords.extend(seniority_level_keywords("staff"));
        }
        if years < 4 {
            too_senior_keywords.extend(seniority_level_keywords("senior"));
        }
    }

    jobs.into_iter()
        .filter(|job| {
            // extracted requirements decide alone; title heuristics are skipped
            if job.required_experience_min.is_some() {
                return experience::is_experience_match(
                    user_years,
                    job.required_experience_min,
                    job.required_experience_max,
                    EXPERIENCE_BUFFER_YEARS,
                );
            }

            let title = job.title.to_lowercase();

            if too_senior_keywords.iter().any(|kw| title.contains(kw)) {
                return false;
            }

            let has_level_indicator = SENIORITY_KEYWORDS
                .iter()
                .any(|(_, kws)| kws.iter().any(|kw| title.contains(kw)));

            !has_level_indicator || valid_keywords.iter().any(|kw| title.contains(kw))
        })
        .collect()
}

/// Removes duplicates on (lowercased title, lowercased company); the first
/// occurrence wins and other jobs keep their relative order.
pub fn deduplicate(jobs: Vec<Job>) -> Vec<Job> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    jobs.into_iter()
        .filter(|job| {
            seen.insert((
                job.title.trim().to_lowercase(),
                job.company.trim().to_lowercase(),
            ))
        })
        .collect()
}
