use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use uuid::Uuid;

use ocuscreen_analysis::MockAnalyzer;
use ocuscreen_auth::jwt::TokenVerifier;
use ocuscreen_capture::{PushFeed, RecordingSession, SessionConfig, SessionState};
use ocuscreen_storage::records::RecordStore;

/// How long a session that is not recording may sit untouched.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(15 * 60);

/// Persistence progress of a session's recording metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    NotSubmitted,
    /// An insert is in flight; further submits are refused until it settles.
    Pending,
    Saved(Uuid),
}

/// A recording session held between the recording and result steps.
pub struct SessionEntry {
    pub owner: String,
    pub story_id: &'static str,
    pub session: RecordingSession,
    pub feed: PushFeed,
    pub submit: SubmitState,
    pub last_active: Instant,
}

impl SessionEntry {
    pub fn record_id(&self) -> Option<Uuid> {
        match self.submit {
            SubmitState::Saved(id) => Some(id),
            _ => None,
        }
    }

    fn expired(&self, now: Instant, ttl: Duration) -> bool {
        self.session.state() != SessionState::Recording
            && now.saturating_duration_since(self.last_active) >= ttl
    }
}

pub type SessionRegistry = Arc<Mutex<HashMap<Uuid, SessionEntry>>>;

/// Drop sessions that are not recording and have been idle for `ttl`.
/// Dropping a session cancels its timers and closes its stream.
pub fn sweep_expired(sessions: &mut HashMap<Uuid, SessionEntry>, ttl: Duration) -> usize {
    let now = Instant::now();
    let before = sessions.len();
    sessions.retain(|_, entry| !entry.expired(now, ttl));
    let evicted = before - sessions.len();
    if evicted > 0 {
        tracing::info!(evicted, remaining = sessions.len(), "evicted idle sessions");
    }
    evicted
}

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub analyzer: Arc<MockAnalyzer>,
    pub verifier: TokenVerifier,
    pub sessions: SessionRegistry,
    pub session_config: SessionConfig,
    pub session_ttl: Duration,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        store: RecordStore,
        analyzer: MockAnalyzer,
        verifier: TokenVerifier,
        session_config: SessionConfig,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            store,
            analyzer: Arc::new(analyzer),
            verifier,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            session_config,
            session_ttl: DEFAULT_SESSION_TTL,
            max_upload_bytes,
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    /// Periodically evict idle sessions. Must be called within a Tokio runtime.
    pub fn spawn_session_sweeper(&self) -> tokio::task::JoinHandle<()> {
        let sessions = Arc::clone(&self.sessions);
        let ttl = self.session_ttl;
        let period = ttl.clamp(Duration::from_secs(1), Duration::from_secs(60));
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                sweep_expired(&mut *sessions.lock().await, ttl);
            }
        })
    }
}
