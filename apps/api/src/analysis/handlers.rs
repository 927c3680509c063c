//! Axum route handler for the analysis API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::analysis::analyzer::analyze_user;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    pub fid: Option<String>,
}

/// GET /analyze-user?fid=<id>
///
/// Runs the full classification pipeline for one user. Atomic: a complete
/// `AnalysisResponse` or an error body, never a partial result.
pub async fn handle_analyze_user(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let fid = parse_fid(params.fid.as_deref())?;

    let response = analyze_user(
        state.farcaster.as_ref(),
        state.llm.as_ref(),
        fid,
        state.config.cast_fetch_limit,
    )
    .await?;

    Ok(Json(response))
}

/// Rejects missing, empty, and non-numeric identifiers before any fetch
/// is attempted.
fn parse_fid(raw: Option<&str>) -> Result<u64, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("FID parameter is required".to_string()))?;

    raw.parse::<u64>()
        .map_err(|_| AppError::BadRequest("FID must be a positive integer".to_string()))
}
