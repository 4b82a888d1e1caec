use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use ocuscreen_core::models::artifact::VideoArtifact;

use crate::device::{CaptureDevice, CaptureStream, StreamConstraints};
use crate::error::CaptureError;

/// Default recording length, in seconds.
pub const DEFAULT_TOTAL_SECS: u32 = 300;

/// How often buffered stream data is collected into a chunk.
pub const DEFAULT_TIMESLICE: Duration = Duration::from_secs(1);

const MIN_TIMESLICE: Duration = Duration::from_millis(10);

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub total_secs: u32,
    pub timeslice: Duration,
    pub constraints: StreamConstraints,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            total_secs: DEFAULT_TOTAL_SECS,
            timeslice: DEFAULT_TIMESLICE,
            constraints: StreamConstraints::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_total_secs(mut self, total_secs: u32) -> Self {
        self.total_secs = total_secs.max(1);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Recording,
    Stopped,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Stopped => "stopped",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Manual,
    CountdownElapsed,
}

/// What a stopped session hands to the next step.
#[derive(Debug, Clone)]
pub struct RecordingOutcome {
    pub artifact: VideoArtifact,
    pub elapsed_secs: u32,
    /// Number of chunks assembled into the artifact.
    pub chunks: usize,
    pub reason: StopReason,
}

/// Point-in-time view of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    pub state: SessionState,
    pub total_secs: u32,
    pub remaining_secs: u32,
    pub elapsed_secs: u32,
    pub buffered_bytes: usize,
    pub chunks: usize,
    pub stop_reason: Option<StopReason>,
}

struct Inner {
    state: SessionState,
    total_secs: u32,
    remaining_secs: u32,
    chunks: Vec<Vec<u8>>,
    stream: Option<Box<dyn CaptureStream>>,
    mime_type: String,
    outcome: Option<RecordingOutcome>,
}

impl Inner {
    fn collect(&mut self) {
        if let Some(stream) = self.stream.as_mut() {
            let data = stream.take_data();
            if !data.is_empty() {
                self.chunks.push(data);
            }
        }
    }

    /// Recording → Stopped. Returns false if the session was not recording.
    fn finish(&mut self, reason: StopReason) -> bool {
        if self.state != SessionState::Recording {
            return false;
        }

        self.collect();
        if let Some(mut stream) = self.stream.take() {
            stream.stop_tracks();
        }

        let chunk_count = self.chunks.len();
        let bytes = std::mem::take(&mut self.chunks).concat();
        let elapsed_secs = self.total_secs - self.remaining_secs;

        info!(
            reason = ?reason,
            elapsed_secs,
            chunks = chunk_count,
            bytes = bytes.len(),
            "recording stopped"
        );

        self.outcome = Some(RecordingOutcome {
            artifact: VideoArtifact::new(bytes, self.mime_type.clone()),
            elapsed_secs,
            chunks: chunk_count,
            reason,
        });
        self.state = SessionState::Stopped;
        true
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A single recording session. See the crate docs for the state machine.
///
/// The session is the only owner of its countdown and chunk-collector tasks;
/// both are cancelled on stop and on drop.
pub struct RecordingSession {
    config: SessionConfig,
    inner: Arc<Mutex<Inner>>,
    tasks: Vec<JoinHandle<()>>,
}

impl RecordingSession {
    pub fn new(config: SessionConfig) -> Self {
        let total_secs = config.total_secs.max(1);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: SessionState::Idle,
                total_secs,
                remaining_secs: total_secs,
                chunks: Vec::new(),
                stream: None,
                mime_type: String::new(),
                outcome: None,
            })),
            config,
            tasks: Vec::new(),
        }
    }

    /// Idle → Recording. Must be called within a Tokio runtime.
    ///
    /// If the device cannot be opened the session stays Idle and the error
    /// is returned; nothing is retried.
    pub fn start(&mut self, device: &dyn CaptureDevice) -> Result<(), CaptureError> {
        let state = lock(&self.inner).state;
        if state != SessionState::Idle {
            return Err(CaptureError::InvalidTransition {
                action: "start",
                state,
            });
        }

        let stream = device.open(&self.config.constraints).inspect_err(|e| {
            warn!(error = %e, "failed to acquire capture stream");
        })?;

        {
            let mut inner = lock(&self.inner);
            inner.mime_type = stream.mime_type().to_string();
            inner.stream = Some(stream);
            inner.remaining_secs = inner.total_secs;
            inner.state = SessionState::Recording;
            info!(
                total_secs = inner.total_secs,
                width = self.config.constraints.width,
                height = self.config.constraints.height,
                "recording started"
            );
        }

        self.tasks
            .push(tokio::spawn(run_countdown(Arc::clone(&self.inner))));
        self.tasks.push(tokio::spawn(run_collector(
            Arc::clone(&self.inner),
            self.config.timeslice.max(MIN_TIMESLICE),
        )));
        Ok(())
    }

    /// Recording → Stopped. A no-op returning `false` in any other state.
    pub fn stop(&mut self) -> bool {
        let stopped = lock(&self.inner).finish(StopReason::Manual);
        self.cancel_timers();
        stopped
    }

    pub fn state(&self) -> SessionState {
        lock(&self.inner).state
    }

    pub fn remaining_secs(&self) -> u32 {
        lock(&self.inner).remaining_secs
    }

    /// The recorded artifact and elapsed duration, once Stopped.
    pub fn outcome(&self) -> Option<RecordingOutcome> {
        lock(&self.inner).outcome.clone()
    }

    pub fn status(&self) -> SessionStatus {
        let inner = lock(&self.inner);
        let (buffered_bytes, chunks) = match &inner.outcome {
            Some(outcome) => (outcome.artifact.len(), outcome.chunks),
            None => (inner.chunks.iter().map(Vec::len).sum(), inner.chunks.len()),
        };
        SessionStatus {
            state: inner.state,
            total_secs: inner.total_secs,
            remaining_secs: inner.remaining_secs,
            elapsed_secs: inner.total_secs - inner.remaining_secs,
            buffered_bytes,
            chunks,
            stop_reason: inner.outcome.as_ref().map(|o| o.reason),
        }
    }

    fn cancel_timers(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for RecordingSession {
    fn drop(&mut self) {
        self.cancel_timers();
        let mut inner = lock(&self.inner);
        if let Some(mut stream) = inner.stream.take() {
            stream.stop_tracks();
            debug!(state = %inner.state, "released capture stream on teardown");
        }
    }
}

async fn run_countdown(inner: Arc<Mutex<Inner>>) {
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    // The first tick completes immediately.
    ticker.tick().await;
    loop {
        ticker.tick().await;
        let mut guard = lock(&inner);
        if guard.state != SessionState::Recording {
            break;
        }
        guard.remaining_secs = guard.remaining_secs.saturating_sub(1);
        if guard.remaining_secs == 0 {
            guard.finish(StopReason::CountdownElapsed);
            break;
        }
    }
}

async fn run_collector(inner: Arc<Mutex<Inner>>, timeslice: Duration) {
    let mut ticker = tokio::time::interval(timeslice);
    ticker.tick().await;
    loop {
        ticker.tick().await;
        let mut guard = lock(&inner);
        if guard.state != SessionState::Recording {
            break;
        }
        guard.collect();
    }
}
