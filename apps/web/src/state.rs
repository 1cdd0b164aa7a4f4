use std::sync::Arc;

use crate::analysis::AnalysisBackend;
use crate::config::Config;
use crate::wizard::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Pluggable analysis backend. Default: MockAnalysis.
    pub analysis: Arc<dyn AnalysisBackend>,
}
