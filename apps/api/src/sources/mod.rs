//! Source clients — one per job board protocol.
//!
//! Clients vary only in endpoint and field mapping, so they share the
//! `SourceClient` contract. Per-company fetches within a client run
//! concurrently with all-settled semantics: a company whose request fails
//! contributes zero jobs and never aborts the batch.

use async_trait::async_trait;

use crate::models::job::Job;

pub mod greenhouse;
pub mod lever;

pub use greenhouse::GreenhouseClient;
pub use lever::LeverClient;

/// Per-request network timeout for source API calls, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Maximum characters of description carried on a `Job`.
pub const DESCRIPTION_LIMIT: usize = 1000;

/// Shared contract for job board clients.
#[async_trait]
pub trait SourceClient: Send + Sync {
    /// Fetches postings for every company concurrently. Failures are isolated
    /// per company and logged, never raised.
    async fn fetch(&self, companies: &[String]) -> Vec<Job>;
}

/// Display-cases a board slug: "jupiter-money" -> "Jupiter Money".
pub(crate) fn display_company_name(slug: &str) -> String {
    slug.replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates a description to `DESCRIPTION_LIMIT` characters; empty input
/// yields `None`.
pub(crate) fn truncate_description(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    Some(text.chars().take(DESCRIPTION_LIMIT).collect())
}
