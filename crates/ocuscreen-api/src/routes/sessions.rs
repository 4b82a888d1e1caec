use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use uuid::Uuid;

use ocuscreen_capture::{PushFeed, RecordingSession, SessionStatus};
use ocuscreen_core::models::artifact::is_video_mime;
use ocuscreen_core::models::notice::Notice;
use ocuscreen_core::models::recording::RecordingRecord;
use ocuscreen_core::models::user::UserIdentity;
use ocuscreen_core::stories;

use crate::error::ApiError;
use crate::state::{AppState, SessionEntry, SubmitState, sweep_expired};

const DEFAULT_MIME: &str = "video/webm";

#[derive(Deserialize)]
pub struct CreateSession {
    story_id: String,
    #[serde(default)]
    mime_type: Option<String>,
}

#[derive(Serialize)]
pub struct SessionView {
    id: Uuid,
    story_id: &'static str,
    #[serde(flatten)]
    status: SessionStatus,
    record_id: Option<Uuid>,
}

impl SessionView {
    fn of(id: Uuid, entry: &SessionEntry) -> Self {
        Self {
            id,
            story_id: entry.story_id,
            status: entry.session.status(),
            record_id: entry.record_id(),
        }
    }
}

#[derive(Serialize)]
pub struct StopResponse {
    stopped: bool,
    #[serde(flatten)]
    session: SessionView,
}

#[derive(Serialize)]
pub struct ChunkAccepted {
    accepted: usize,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    record_id: Option<Uuid>,
    duration_secs: u32,
    notices: Vec<Notice>,
}

/// Sessions belonging to someone else are reported as missing. A hit
/// refreshes the session's idle timer.
fn owned<'a>(
    sessions: &'a mut HashMap<Uuid, SessionEntry>,
    id: Uuid,
    user: &UserIdentity,
) -> Result<&'a mut SessionEntry, ApiError> {
    let entry = sessions
        .get_mut(&id)
        .filter(|entry| entry.owner == user.id)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
    entry.last_active = Instant::now();
    Ok(entry)
}

pub async fn create_session(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    payload: Result<Json<CreateSession>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let Json(request) = payload?;
    let story = stories::require_story(&request.story_id)?;

    let mime_type = request.mime_type.unwrap_or_else(|| DEFAULT_MIME.to_string());
    if !is_video_mime(&mime_type) {
        return Err(ApiError::UnsupportedMediaType(format!(
            "unsupported media type: {mime_type}"
        )));
    }

    let id = Uuid::new_v4();
    let entry = SessionEntry {
        owner: user.id.clone(),
        story_id: story.id,
        session: RecordingSession::new(state.session_config.clone()),
        feed: PushFeed::new(mime_type).with_limit(state.max_upload_bytes),
        submit: SubmitState::NotSubmitted,
        last_active: Instant::now(),
    };
    let view = SessionView::of(id, &entry);
    {
        let mut sessions = state.sessions.lock().await;
        sweep_expired(&mut sessions, state.session_ttl);
        sessions.insert(id, entry);
    }

    tracing::info!(session = %id, user = %user.id, story = story.id, "session created");
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_session(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let entry = owned(&mut sessions, id, &user)?;
    Ok(Json(SessionView::of(id, entry)))
}

pub async fn start_session(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let entry = owned(&mut sessions, id, &user)?;
    let device = entry.feed.device();
    entry.session.start(&device)?;
    Ok(Json(SessionView::of(id, entry)))
}

pub async fn push_chunk(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<ChunkAccepted>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let entry = owned(&mut sessions, id, &user)?;
    let accepted = entry.feed.push(&body)?;
    Ok(Json(ChunkAccepted { accepted }))
}

/// Stop the recording. Stopping an already stopped session reports
/// `stopped: false` and changes nothing.
pub async fn stop_session(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(id): Path<Uuid>,
) -> Result<Json<StopResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let entry = owned(&mut sessions, id, &user)?;
    let stopped = entry.session.stop();
    Ok(Json(StopResponse {
        stopped,
        session: SessionView::of(id, entry),
    }))
}

pub async fn download_video(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let entry = owned(&mut sessions, id, &user)?;
    let outcome = entry
        .session
        .outcome()
        .ok_or_else(|| ApiError::Conflict(format!("session {id} has no recording yet")))?;

    Ok((
        [(header::CONTENT_TYPE, outcome.artifact.mime_type)],
        outcome.artifact.bytes,
    )
        .into_response())
}

/// Persist the metadata of a stopped recording, once.
///
/// The session is marked pending before the insert so concurrent submits
/// are refused. A failed insert is reported as a warning notice and the
/// session can be submitted again; the recording stays available for
/// analysis either way.
pub async fn submit_session(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let record = {
        let mut sessions = state.sessions.lock().await;
        let entry = owned(&mut sessions, id, &user)?;
        match entry.submit {
            SubmitState::Saved(_) => {
                return Err(ApiError::Conflict(format!("session {id} was already submitted")));
            }
            SubmitState::Pending => {
                return Err(ApiError::Conflict(format!("session {id} is being submitted")));
            }
            SubmitState::NotSubmitted => {}
        }
        let outcome = entry
            .session
            .outcome()
            .ok_or_else(|| ApiError::Conflict(format!("session {id} is not stopped")))?;
        entry.submit = SubmitState::Pending;
        RecordingRecord::new(&user.id, entry.story_id, outcome.elapsed_secs)
    };

    let saved = state.store.insert_recording(&record).await;

    if let Some(entry) = state.sessions.lock().await.get_mut(&id) {
        entry.submit = if saved.is_ok() {
            SubmitState::Saved(record.id)
        } else {
            SubmitState::NotSubmitted
        };
    }

    let mut notices = Vec::new();
    let record_id = match saved {
        Ok(_) => {
            notices.push(Notice::info("Recording saved."));
            Some(record.id)
        }
        Err(e) => {
            tracing::warn!(session = %id, error = %e, "failed to save recording metadata");
            notices.push(Notice::warning(format!(
                "Your recording could not be saved: {e}"
            )));
            None
        }
    };

    Ok(Json(SubmitResponse {
        record_id,
        duration_secs: record.duration_secs,
        notices,
    }))
}

/// Tear a session down. Its timers are cancelled and its stream closed.
pub async fn delete_session(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.sessions.lock().await;
    owned(&mut sessions, id, &user)?;
    sessions.remove(&id);
    tracing::info!(session = %id, "session removed");
    Ok(StatusCode::NO_CONTENT)
}
