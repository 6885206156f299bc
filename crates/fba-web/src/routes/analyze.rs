//! Match analysis route handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Local;
use fba_core::analysis::analyze_match;
use fba_core::{AnalysisResult, MatchRequest};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/analyze - Analyse a fixture.
///
/// Validation happens before the think delay, so bad requests are answered
/// immediately.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected analysis request body");
        ApiError::BadRequest("Invalid request body".to_string())
    })?;

    let fixture = req.validate().map_err(|e| {
        warn!(error = %e, "Analysis request failed validation");
        ApiError::from(e)
    })?;

    if !state.think_delay.is_zero() {
        tokio::time::sleep(state.think_delay).await;
    }

    let mut sampler = state.sampler();
    let result = analyze_match(
        &fixture,
        &state.tiers,
        sampler.as_mut(),
        Local::now().date_naive(),
    );

    info!(
        home = %fixture.home_team,
        away = %fixture.away_team,
        league = %fixture.league,
        prediction = %result.prediction,
        confidence = result.confidence,
        "Match analysis served"
    );

    Ok(Json(result))
}
