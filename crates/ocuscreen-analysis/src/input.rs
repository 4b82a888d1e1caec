use serde::{Deserialize, Serialize};

use ocuscreen_core::models::artifact::VideoArtifact;

use crate::error::AnalysisError;

/// Where the analyzed video came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoSource {
    Upload,
    Recording,
}

/// Pick the single video to analyze.
///
/// Exactly one of `upload` and `recording` must be present; an empty upload
/// counts as absent. The chosen artifact must carry a `video/*` type.
pub fn select_source(
    upload: Option<VideoArtifact>,
    recording: Option<VideoArtifact>,
) -> Result<(VideoSource, VideoArtifact), AnalysisError> {
    let upload = upload.filter(|a| !a.is_empty());
    let (source, artifact) = match (upload, recording) {
        (None, None) => return Err(AnalysisError::NoVideo),
        (Some(_), Some(_)) => return Err(AnalysisError::AmbiguousSource),
        (Some(upload), None) => (VideoSource::Upload, upload),
        (None, Some(recording)) => (VideoSource::Recording, recording),
    };
    ensure_video(&artifact)?;
    Ok((source, artifact))
}

pub fn ensure_video(artifact: &VideoArtifact) -> Result<(), AnalysisError> {
    if artifact.is_empty() {
        return Err(AnalysisError::NoVideo);
    }
    if !artifact.is_video() {
        return Err(AnalysisError::UnsupportedMediaType(artifact.mime_type.clone()));
    }
    Ok(())
}
