//! Greenhouse job board client.
//!
//! `GET https://boards-api.greenhouse.io/v1/boards/{company}/jobs?content=true`

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{display_company_name, truncate_description, SourceClient, FETCH_TIMEOUT_SECS};
use crate::experience;
use crate::models::job::{Job, Source};

const BASE_URL: &str = "https://boards-api.greenhouse.io/v1/boards";

#[derive(Debug, Deserialize)]
struct BoardResponse {
    #[serde(default)]
    jobs: Vec<BoardJob>,
}

#[derive(Debug, Deserialize)]
struct BoardJob {
    id: Option<i64>,
    #[serde(default)]
    title: String,
    /// HTML description, present when `content=true` is requested.
    #[serde(default)]
    content: String,
    location: Option<BoardLocation>,
    #[serde(default)]
    absolute_url: String,
    updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BoardLocation {
    name: Option<String>,
}

pub struct GreenhouseClient {
    client: Client,
}

impl GreenhouseClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    async fn fetch_company(&self, company: &str) -> Result<Vec<Job>> {
        let url = format!("{BASE_URL}/{company}/jobs?content=true");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to Greenhouse board '{company}' failed"))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Greenhouse board '{company}' returned {}",
                response.status()
            );
        }

        let board: BoardResponse = response
            .json()
            .await
            .with_context(|| format!("invalid response from Greenhouse board '{company}'"))?;

        Ok(board
            .jobs
            .into_iter()
            .map(|raw| map_job(company, raw))
            .collect())
    }
}

impl Default for GreenhouseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceClient for GreenhouseClient {
    async fn fetch(&self, companies: &[String]) -> Vec<Job> {
        let fetches = companies.iter().map(|company| async move {
            match self.fetch_company(company).await {
                Ok(jobs) => {
                    debug!("Greenhouse '{company}': {} jobs", jobs.len());
                    jobs
                }
                Err(e) => {
                    warn!("Skipping Greenhouse board '{company}': {e:#}");
                    Vec::new()
                }
            }
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }
}

fn map_job(company: &str, raw: BoardJob) -> Job {
    let description = if raw.content.is_empty() {
        None
    } else {
        Some(raw.content.as_str())
    };
    let (min_exp, max_exp) = experience::extract(&raw.title, description);

    Job {
        id: format!(
            "gh_{company}_{}",
            raw.id.map(|id| id.to_string()).unwrap_or_default()
        ),
        title: raw.title,
        company: display_company_name(company),
        location: raw.location.and_then(|l| l.name),
        url: raw.absolute_url,
        source: Source::Greenhouse,
        posted_date: raw.updated_at.as_deref().map(date_part),
        description: truncate_description(&raw.content),
        salary_min: None,
        salary_max: None,
        required_experience_min: min_exp,
        required_experience_max: max_exp,
    }
}

/// `updated_at` arrives as an RFC 3339 timestamp; keep the date part.
fn date_part(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => timestamp.chars().take(10).collect(),
    }
}
