//! Axum route handlers for the search API.

use axum::{extract::State, Json};

use crate::aggregator::JobAggregator;
use crate::errors::AppError;
use crate::models::profile::{AnalyzeResponse, CompaniesResponse, ProfileRequest};
use crate::search::run_analysis;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Expands the candidate profile, fetches and filters jobs from every
/// configured board, ranks them, and returns the curated list.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(profile): Json<ProfileRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    profile.validate()?;
    Ok(Json(run_analysis(&state, profile).await))
}

/// GET /api/v1/companies
///
/// The searchable company registry, grouped by job board source.
pub async fn handle_companies() -> Json<CompaniesResponse> {
    Json(JobAggregator::available_companies())
}
