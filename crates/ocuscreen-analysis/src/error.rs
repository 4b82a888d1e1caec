use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no video selected")]
    NoVideo,

    #[error("both an uploaded video and a recording were given; choose one")]
    AmbiguousSource,

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("invalid frame series: {0}")]
    InvalidFrames(String),
}
