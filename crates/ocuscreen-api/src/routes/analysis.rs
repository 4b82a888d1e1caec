use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, header};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ocuscreen_analysis::AnalysisReport;
use ocuscreen_analysis::features::{FrameSeries, VideoFeatures};
use ocuscreen_analysis::input::{VideoSource, select_source};
use ocuscreen_core::models::artifact::VideoArtifact;
use ocuscreen_core::models::user::UserIdentity;

use crate::error::ApiError;
use crate::state::{AppState, SubmitState};

#[derive(Deserialize)]
pub struct AnalysisParams {
    session: Option<Uuid>,
    osdi_score: Option<f64>,
}

#[derive(Serialize)]
pub struct AnalysisResponse {
    source: VideoSource,
    #[serde(flatten)]
    report: AnalysisReport,
}

/// Analyze either the request body (an uploaded video) or the recording of
/// `?session=`. Exactly one must be present.
///
/// Analyzing a recording consumes its session; submit it first to keep its
/// metadata.
pub async fn analyze(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Query(params): Query<AnalysisParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let upload = (!body.is_empty()).then(|| {
        let mime_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream");
        VideoArtifact::new(body.to_vec(), mime_type)
    });

    let (source, video) = match params.session {
        Some(id) => {
            let mut sessions = state.sessions.lock().await;
            let entry = sessions
                .get(&id)
                .filter(|entry| entry.owner == user.id)
                .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
            if entry.submit == SubmitState::Pending {
                return Err(ApiError::Conflict(format!("session {id} is being submitted")));
            }
            let outcome = entry
                .session
                .outcome()
                .ok_or_else(|| ApiError::Conflict(format!("session {id} has no recording yet")))?;
            let selected = select_source(upload, Some(outcome.artifact))?;
            sessions.remove(&id);
            tracing::info!(session = %id, "session consumed by analysis");
            selected
        }
        None => select_source(upload, None)?,
    };
    tracing::info!(user = %user.id, source = ?source, bytes = video.len(), "analysis requested");

    let result = state.analyzer.analyze(&video).await?;

    Ok(Json(AnalysisResponse {
        source,
        report: AnalysisReport::new(result, params.osdi_score),
    }))
}

pub async fn extract_features(
    payload: Result<Json<FrameSeries>, JsonRejection>,
) -> Result<Json<VideoFeatures>, ApiError> {
    let Json(series) = payload?;
    Ok(Json(series.extract()?))
}
