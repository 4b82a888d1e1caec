use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("no questions answered")]
    NoAnswers,

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
