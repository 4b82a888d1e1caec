use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid answer value: {0}")]
    InvalidAnswer(String),

    #[error("unknown story: {0}")]
    UnknownStory(String),
}
