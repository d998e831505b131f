//! Normalized job posting types shared across the fetch / filter / rank pipeline.

use serde::{Deserialize, Serialize};

/// Job board a posting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Greenhouse,
    Lever,
}

/// A normalized job posting. Built by a source client at fetch time and
/// immutable afterwards; lives only for the duration of one request.
///
/// `id` is globally unique per (source, company, source-native-id):
/// `gh_{company}_{id}` / `lv_{company}_{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    /// Display-cased board slug ("jupiter-money" -> "Jupiter Money").
    pub company: String,
    pub location: Option<String>,
    pub url: String,
    pub source: Source,
    /// ISO date (YYYY-MM-DD) when the source provides one.
    pub posted_date: Option<String>,
    /// Truncated to 1000 characters at fetch time.
    pub description: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    /// Years-of-experience bounds extracted from title/description.
    pub required_experience_min: Option<u8>,
    pub required_experience_max: Option<u8>,
}

/// A job augmented with the external scorer's verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: Job,
    /// 0–100 inclusive.
    pub match_score: u8,
    pub insight: String,
    pub match_reasons: Vec<String>,
}

/// One scorer verdict, positionally paired with a submitted job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobScore {
    pub match_score: u8,
    pub insight: String,
    pub match_reasons: Vec<String>,
}

impl RankedJob {
    pub fn from_score(job: Job, score: JobScore) -> Self {
        Self {
            job,
            match_score: score.match_score.min(100),
            insight: score.insight,
            match_reasons: score.match_reasons,
        }
    }
}
