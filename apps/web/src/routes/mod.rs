pub mod catalog;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    response::Html,
    routing::{get, post},
    Router,
};

use crate::render::landing::landing_page;
use crate::results::handlers as results;
use crate::state::AppState;
use crate::wizard::handlers as wizard;

async fn landing() -> Html<String> {
    Html(landing_page())
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(landing))
        .route("/analyze", get(wizard::handle_start))
        .route("/analyze/:id", get(wizard::handle_wizard_page))
        .route("/analyze/:id/cv", post(wizard::handle_upload))
        .route("/analyze/:id/role", post(wizard::handle_choose_role))
        .route("/results", get(results::handle_results_page))
        .route("/results/report", get(results::handle_results_report))
        // JSON API
        .route("/api/v1/roles", get(catalog::handle_list_roles))
        .route("/api/v1/results", get(results::handle_results_json))
        .route(
            "/api/v1/sessions/:id",
            get(wizard::handle_session_status),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
