use std::sync::Arc;

use crate::aggregator::JobAggregator;
use crate::llm_client::LlmClient;
use crate::ranking::JobScorer;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the source clients and their HTTP connection pools.
    pub aggregator: Arc<JobAggregator>,
    /// Pluggable scoring collaborator. Default: `LlmScorer`.
    pub scorer: Arc<dyn JobScorer>,
    pub llm: LlmClient,
}
