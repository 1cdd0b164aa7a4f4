//! Axum route handlers for the results view.
//!
//! A malformed query never fails these handlers: it resolves to the default role.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::render::results::results_page;
use crate::results::report::{render_report, REPORT_FILENAME};
use crate::results::{resolve_role, ResultPayload, ResultsQuery};
use crate::state::AppState;

async fn load_payload(
    state: &AppState,
    query: Option<Query<ResultsQuery>>,
) -> Result<ResultPayload, AppError> {
    let requested = query.and_then(|Query(q)| q.role);
    let role = resolve_role(requested.as_deref());
    debug!(role = %role, backend = state.analysis.backend_name(), "Loading results");
    state.analysis.analyze(&role).await
}

/// GET /results
pub async fn handle_results_page(
    State(state): State<AppState>,
    query: Option<Query<ResultsQuery>>,
) -> Result<Html<String>, AppError> {
    let payload = load_payload(&state, query).await?;
    Ok(Html(results_page(&payload)))
}

/// GET /results/report
pub async fn handle_results_report(
    State(state): State<AppState>,
    query: Option<Query<ResultsQuery>>,
) -> Result<impl IntoResponse, AppError> {
    let payload = load_payload(&state, query).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        render_report(&payload),
    ))
}

/// GET /api/v1/results
pub async fn handle_results_json(
    State(state): State<AppState>,
    query: Option<Query<ResultsQuery>>,
) -> Result<Json<ResultPayload>, AppError> {
    Ok(Json(load_payload(&state, query).await?))
}
