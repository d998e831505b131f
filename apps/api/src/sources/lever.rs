//! Lever job board client.
//!
//! `GET https://api.lever.co/v0/postings/{company}` — returns a bare JSON
//! array of postings.

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{display_company_name, truncate_description, SourceClient, FETCH_TIMEOUT_SECS};
use crate::experience;
use crate::models::job::{Job, Source};

const BASE_URL: &str = "https://api.lever.co/v0/postings";

#[derive(Debug, Deserialize)]
struct Posting {
    #[serde(default)]
    id: String,
    /// Lever calls the job title "text".
    #[serde(default)]
    text: String,
    #[serde(rename = "descriptionPlain", default)]
    description_plain: String,
    categories: Option<Categories>,
    #[serde(rename = "hostedUrl", default)]
    hosted_url: String,
}

#[derive(Debug, Deserialize)]
struct Categories {
    location: Option<String>,
}

pub struct LeverClient {
    client: Client,
}

impl LeverClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    async fn fetch_company(&self, company: &str) -> Result<Vec<Job>> {
        let url = format!("{BASE_URL}/{company}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to Lever board '{company}' failed"))?;

        if !response.status().is_success() {
            anyhow::bail!("Lever board '{company}' returned {}", response.status());
        }

        let postings: Vec<Posting> = response
            .json()
            .await
            .with_context(|| format!("invalid response from Lever board '{company}'"))?;

        Ok(postings
            .into_iter()
            .map(|raw| map_posting(company, raw))
            .collect())
    }
}

impl Default for LeverClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceClient for LeverClient {
    async fn fetch(&self, companies: &[String]) -> Vec<Job> {
        let fetches = companies.iter().map(|company| async move {
            match self.fetch_company(company).await {
                Ok(jobs) => {
                    debug!("Lever '{company}': {} jobs", jobs.len());
                    jobs
                }
                Err(e) => {
                    warn!("Skipping Lever board '{company}': {e:#}");
                    Vec::new()
                }
            }
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }
}

fn map_posting(company: &str, raw: Posting) -> Job {
    let description = if raw.description_plain.is_empty() {
        None
    } else {
        Some(raw.description_plain.as_str())
    };
    let (min_exp, max_exp) = experience::extract(&raw.text, description);

    Job {
        id: format!("lv_{company}_{}", raw.id),
        title: raw.text,
        company: display_company_name(company),
        location: raw.categories.and_then(|c| c.location),
        url: raw.hosted_url,
        source: Source::Lever,
        // Lever postings don't reliably carry a posting date
        posted_date: None,
        description: truncate_description(&raw.description_plain),
        salary_min: None,
        salary_max: None,
        required_experience_min: min_exp,
        required_experience_max: max_exp,
    }
}
