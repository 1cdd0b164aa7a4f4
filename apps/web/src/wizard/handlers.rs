//! Axum route handlers for the wizard pages.

use axum::{
    extract::{Multipart, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::schedule::AnalysisProgress;
use crate::errors::AppError;
use crate::render::wizard::{wizard_page, WizardView};
use crate::state::AppState;
use crate::wizard::machine::{RoleOutcome, WizardState};
use crate::wizard::upload::{CandidateFile, FileSummary};

/// Multipart field carrying the CV.
pub const CV_FIELD: &str = "cv";

#[derive(Debug, Deserialize)]
pub struct RoleForm {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: Uuid,
    pub state: WizardState,
    pub created_at: DateTime<Utc>,
    pub file: Option<FileSummary>,
    pub role: Option<String>,
    pub progress: Option<AnalysisProgress>,
    pub analysis_complete: bool,
    /// Results URI once the navigation timer has fired.
    pub destination: Option<String>,
}

fn wizard_path(id: Uuid) -> String {
    format!("/analyze/{id}")
}

/// GET /analyze
///
/// Starts a new wizard and sends the browser to its page.
pub async fn handle_start(State(state): State<AppState>) -> Redirect {
    let id = state.sessions.create().await;
    Redirect::to(&wizard_path(id))
}

/// GET /analyze/:id
///
/// Renders the current step, or follows the navigation handoff once the
/// analysis timer has fired.
pub async fn handle_wizard_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    if let Some(destination) = state.sessions.take_destination(id).await? {
        info!(session_id = %id, role = %destination.role, "Redirecting to results");
        return Ok(Redirect::to(&destination.to_uri()).into_response());
    }

    let view = state
        .sessions
        .with_session(id, |s| WizardView::capture(id, &s.wizard))
        .await?;
    Ok(Html(wizard_page(&view)).into_response())
}

/// POST /analyze/:id/cv
///
/// Collects every file posted under the `cv` field and offers them to the
/// drop zone. A refused drop just re-renders the upload step.
pub async fn handle_upload(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut candidates = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some(CV_FIELD) {
            continue;
        }
        // Browsers send an empty part when no file was picked.
        let name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        let mime = field.content_type().map(String::from);
        let contents = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?;
        candidates.push(CandidateFile::new(name, mime, contents));
    }

    let accepted = state
        .sessions
        .with_session(id, |s| s.wizard.on_file_dropped(candidates))
        .await??;
    if !accepted {
        debug!(session_id = %id, "Upload refused, staying on upload step");
    }

    Ok(Redirect::to(&wizard_path(id)))
}

/// POST /analyze/:id/role
pub async fn handle_choose_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<RoleForm>,
) -> Result<Redirect, AppError> {
    let navigator = state.sessions.navigator(id);
    let outcome = state
        .sessions
        .with_session(id, |s| s.wizard.on_role_chosen(&form.role, navigator))
        .await??;
    if outcome == RoleOutcome::AlreadyScheduled {
        debug!(session_id = %id, "Role re-selected, analysis already running");
    }

    Ok(Redirect::to(&wizard_path(id)))
}

/// GET /api/v1/sessions/:id
///
/// Read-only view of a wizard. Does not consume the navigation handoff.
pub async fn handle_session_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionStatusResponse>, AppError> {
    let status = state
        .sessions
        .with_session(id, |s| SessionStatusResponse {
            session_id: id,
            state: s.wizard.state(),
            created_at: s.created_at,
            file: s.wizard.file().map(|f| f.summary()),
            role: s.wizard.role().map(String::from),
            progress: s.wizard.progress(),
            analysis_complete: s.wizard.navigation_fired(),
            destination: s.destination.as_ref().map(|d| d.to_uri()),
        })
        .await?;
    Ok(Json(status))
}
