//! League list route handler.

use axum::Json;
use fba_core::analysis::model::LEAGUES;

/// GET /api/leagues - Competitions offered by the analysis form.
pub async fn list_leagues() -> Json<Vec<&'static str>> {
    Json(LEAGUES.to_vec())
}
