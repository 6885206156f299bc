//! Dashboard route handler.
//!
//! Serves the single analysis page. The page talks to `/api/analyze`
//! from the browser and renders the result client-side.

use askama::Template;
use axum::response::Html;
use fba_core::analysis::model::{DEFAULT_LEAGUE, LEAGUES};

use crate::error::ApiError;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    leagues: Vec<LeagueOption>,
}

/// View model for a league `<option>`.
struct LeagueOption {
    name: &'static str,
    selected: bool,
}

/// GET / - Serve the analysis page.
pub async fn index() -> Result<Html<String>, ApiError> {
    let page = IndexTemplate {
        leagues: LEAGUES
            .iter()
            .map(|&name| LeagueOption {
                name,
                selected: name == DEFAULT_LEAGUE,
            })
            .collect(),
    };

    let html = page
        .render()
        .map_err(|e| ApiError::Internal(format!("template render failed: {e}")))?;

    Ok(Html(html))
}
