use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use uuid::Uuid;

use simplr_core::models::session::BrowseSession;
use simplr_export::styles::ReportStyle;
use simplr_gemini::client::GeminiClient;
use simplr_github::client::GithubClient;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub github: GithubClient,
    pub gemini: GeminiClient,
    pub style: Arc<ReportStyle>,
    pub trailer_image: PathBuf,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: ServerConfig) -> eyre::Result<Self> {
        let github = GithubClient::new(config.github.clone())?;
        let gemini = GeminiClient::new(config.gemini.clone(), config.gemini_api_key.clone())?;
        let idle = Duration::from_secs(config.server.session_idle_secs);

        Ok(Self {
            github,
            gemini,
            style: Arc::new(config.report.style.clone()),
            trailer_image: config.report.trailer_image.clone(),
            config: Arc::new(config),
            sessions: SessionStore::new(idle),
        })
    }
}

/// One browse session plus the flag that guards against overlapping report
/// generations.
#[derive(Debug, Clone)]
pub struct SessionSlot {
    pub session: BrowseSession,
    pub generating: bool,
    pub last_seen: Instant,
}

impl SessionSlot {
    /// A slot with a report in flight never expires.
    fn is_idle(&self, now: Instant, idle: Duration) -> bool {
        !self.generating && now.saturating_duration_since(self.last_seen) > idle
    }
}

/// In-memory sessions keyed by id. Nothing is persisted; sessions nobody has
/// touched for `idle` are dropped.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, SessionSlot>>>,
    idle: Duration,
}

impl SessionStore {
    pub fn new(idle: Duration) -> Self {
        Self {
            inner: Arc::default(),
            idle,
        }
    }

    /// Add a session, dropping idle ones first.
    pub async fn insert(&self, session: BrowseSession) -> Uuid {
        let now = Instant::now();
        let id = Uuid::new_v4();
        let slot = SessionSlot {
            session,
            generating: false,
            last_seen: now,
        };

        let mut sessions = self.inner.lock().await;
        sweep(&mut sessions, now, self.idle);
        sessions.insert(id, slot);
        id
    }

    /// Run `f` against a session under the lock and mark it as used. `None`
    /// if the id is unknown or the session has gone idle.
    pub async fn with<R>(&self, id: Uuid, f: impl FnOnce(&mut SessionSlot) -> R) -> Option<R> {
        let now = Instant::now();
        let mut sessions = self.inner.lock().await;

        if sessions.get(&id)?.is_idle(now, self.idle) {
            sessions.remove(&id);
            tracing::info!(%id, "session expired");
            return None;
        }

        let slot = sessions.get_mut(&id)?;
        slot.last_seen = now;
        Some(f(slot))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.lock().await.remove(&id).is_some()
    }

    /// Drop every session idle as of `now`. Returns how many were dropped.
    pub async fn expire_idle(&self, now: Instant) -> usize {
        let mut sessions = self.inner.lock().await;
        sweep(&mut sessions, now, self.idle)
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.inner.lock().await.contains_key(&id)
    }
}

fn sweep(sessions: &mut HashMap<Uuid, SessionSlot>, now: Instant, idle: Duration) -> usize {
    let before = sessions.len();
    sessions.retain(|_, slot| !slot.is_idle(now, idle));
    let dropped = before - sessions.len();
    if dropped > 0 {
        tracing::info!(dropped, remaining = sessions.len(), "idle sessions expired");
    }
    dropped
}
