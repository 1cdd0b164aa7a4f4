//! In-memory wizard sessions, one per `/analyze/{id}` URL.
//!
//! A session ends when the browser follows its navigation handoff, or when the
//! sweeper finds it older than the configured TTL. Nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::wizard::machine::Wizard;
use crate::wizard::navigation::{Navigator, ResultsDestination};

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct Session {
    pub wizard: Wizard,
    pub created_at: DateTime<Utc>,
    /// Set by the navigation timer; consumed by the next page load.
    pub destination: Option<ResultsDestination>,
}

impl Session {
    fn new() -> Self {
        Self {
            wizard: Wizard::new(),
            created_at: Utc::now(),
            destination: None,
        }
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, Session::new());
        info!(session_id = %id, "Wizard session created");
        id
    }

    /// Runs `f` against the session, or fails with `NotFound`.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        Ok(f(session))
    }

    /// Returns the pending handoff, ending the session if there is one.
    pub async fn take_destination(&self, id: Uuid) -> Result<Option<ResultsDestination>, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

        if session.destination.is_none() {
            return Ok(None);
        }
        let destination = sessions.remove(&id).and_then(|s| s.destination);
        info!(session_id = %id, "Wizard session completed");
        Ok(destination)
    }

    pub fn navigator(&self, id: Uuid) -> Arc<dyn Navigator> {
        Arc::new(SessionNavigator {
            store: self.clone(),
            id,
        })
    }

    /// Drops sessions created more than `ttl` ago. Returns how many were removed.
    pub async fn evict_older_than(&self, ttl: chrono::Duration) -> usize {
        let cutoff = Utc::now() - ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.created_at > cutoff);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Records the handoff on the session so the next page load can redirect.
struct SessionNavigator {
    store: SessionStore,
    id: Uuid,
}

#[async_trait]
impl Navigator for SessionNavigator {
    async fn navigate(&self, destination: ResultsDestination) {
        let recorded = self
            .store
            .with_session(self.id, |session| {
                session.destination = Some(destination);
            })
            .await;
        if recorded.is_err() {
            debug!(session_id = %self.id, "Session gone before navigation fired");
        }
    }
}

/// Periodically evicts sessions older than `ttl`.
pub fn spawn_sweeper(store: SessionStore, ttl: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::hours(1));
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let evicted = store.evict_older_than(ttl).await;
            if evicted > 0 {
                let remaining = store.len().await;
                info!(evicted, remaining, "Evicted stale wizard sessions");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::wizard::machine::WizardState;
    use crate::wizard::upload::CandidateFile;

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = SessionStore::new();
        let result = store.with_session(Uuid::new_v4(), |_| ()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_new_session_starts_in_upload() {
        let store = SessionStore::new();
        let id = store.create().await;
        let state = store.with_session(id, |s| s.wizard.state()).await.unwrap();
        assert_eq!(state, WizardState::Upload);
        assert_eq!(store.take_destination(id).await.unwrap(), None);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_handoff_is_consumed_once() {
        let store = SessionStore::new();
        let id = store.create().await;
        let navigator = store.navigator(id);
        store
            .with_session(id, |s| {
                let pdf = CandidateFile::new(
                    "cv.pdf",
                    Some("application/pdf".to_string()),
                    Bytes::from_static(b"%PDF"),
                );
                s.wizard.on_file_dropped(vec![pdf]).unwrap();
                s.wizard.on_role_chosen("Full Stack Developer", navigator).unwrap();
            })
            .await
            .unwrap();

        assert_eq!(store.take_destination(id).await.unwrap(), None);

        tokio::time::sleep(Duration::from_millis(5_100)).await;
        let destination = store.take_destination(id).await.unwrap().unwrap();
        assert_eq!(destination.to_uri(), "/results?role=Full%20Stack%20Developer");

        // Following the handoff ends the session.
        assert!(matches!(
            store.take_destination(id).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_navigation_after_eviction_is_ignored() {
        let store = SessionStore::new();
        let id = store.create().await;
        let navigator = store.navigator(id);
        assert_eq!(store.evict_older_than(chrono::Duration::zero()).await, 1);

        navigator
            .navigate(ResultsDestination::new("Web Developer"))
            .await;
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_eviction_keeps_fresh_sessions() {
        let store = SessionStore::new();
        store.create().await;
        assert_eq!(store.evict_older_than(chrono::Duration::hours(1)).await, 0);
        assert_eq!(store.len().await, 1);
    }
}
