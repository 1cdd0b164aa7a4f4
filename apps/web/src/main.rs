mod analysis;
mod catalog;
mod config;
mod errors;
mod render;
mod results;
mod routes;
mod state;
mod wizard;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{AnalysisBackend, MockAnalysis};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::wizard::session::{spawn_sweeper, SessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skillgap v{}", env!("CARGO_PKG_VERSION"));

    // Wizard sessions live in memory only
    let sessions = SessionStore::new();
    let _sweeper = spawn_sweeper(
        sessions.clone(),
        Duration::from_secs(config.session_ttl_secs),
    );
    info!("Session store ready (ttl {}s)", config.session_ttl_secs);

    // Analysis backend (MockAnalysis is the only implementation)
    let analysis: Arc<dyn AnalysisBackend> = Arc::new(MockAnalysis);
    info!("Analysis backend: {}", analysis.backend_name());

    // Build app state
    let state = AppState {
        config: config.clone(),
        sessions,
        analysis,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // JSON API is read-only

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
