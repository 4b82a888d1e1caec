use thiserror::Error;

use crate::session::SessionState;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera acquisition failed: {0}")]
    Acquisition(String),

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: SessionState,
    },

    #[error("no open capture stream")]
    NoStream,

    #[error("recording exceeds the {limit}-byte limit")]
    LimitExceeded { limit: usize },
}
