//! Ranking Orchestrator — batches jobs, dispatches each batch to the scoring
//! collaborator under a bounded-concurrency cap, merges the verdicts, and
//! sorts by match score.
//!
//! A failed batch is logged and its jobs dropped; sibling batches are never
//! affected. Ties on match score keep submission order (stable sort).

pub mod prompts;
pub mod scorer;

use anyhow::Result;
use async_trait::async_trait;
use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::warn;

use crate::models::job::{Job, JobScore, RankedJob};
use crate::models::profile::{ExpandedProfile, ProfileRequest};

pub use scorer::LlmScorer;

/// Jobs beyond this cap are silently dropped, not ranked.
pub const MAX_JOBS_TO_RANK: usize = 50;
/// Jobs per scoring call.
pub const BATCH_SIZE: usize = 15;
/// Maximum simultaneous in-flight batches.
pub const MAX_CONCURRENT_BATCHES: usize = 5;

/// External scoring collaborator. Returns one verdict per submitted job, in
/// submission order.
#[async_trait]
pub trait JobScorer: Send + Sync {
    async fn score_batch(
        &self,
        jobs: &[Job],
        profile: &ProfileRequest,
        expanded: &ExpandedProfile,
    ) -> Result<Vec<JobScore>>;
}

/// Ranks up to `MAX_JOBS_TO_RANK` jobs and returns them sorted by descending
/// match score.
pub async fn rank_jobs(
    scorer: &dyn JobScorer,
    mut jobs: Vec<Job>,
    profile: &ProfileRequest,
    expanded: &ExpandedProfile,
) -> Vec<RankedJob> {
    if jobs.is_empty() {
        return Vec::new();
    }
    jobs.truncate(MAX_JOBS_TO_RANK);

    let semaphore = Semaphore::new(MAX_CONCURRENT_BATCHES);
    let batch_futures = jobs.chunks(BATCH_SIZE).map(|batch| {
        let semaphore = &semaphore;
        async move {
            let _permit = semaphore.acquire().await.expect("semaphore never closed");
            (batch, scorer.score_batch(batch, profile, expanded).await)
        }
    });

    let mut ranked: Vec<RankedJob> = Vec::with_capacity(jobs.len());
    for (batch, result) in join_all(batch_futures).await {
        match result {
            Ok(scores) => {
                if scores.len() != batch.len() {
                    warn!(
                        "Scorer returned {} verdicts for a batch of {}",
                        scores.len(),
                        batch.len()
                    );
                }
                // positional zip; surplus verdicts are ignored
                for (job, score) in batch.iter().cloned().zip(scores) {
                    ranked.push(RankedJob::from_score(job, score));
                }
            }
            Err(e) => {
                warn!("Dropping batch of {} jobs, scoring failed: {e:#}", batch.len());
            }
        }
    }

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}
