use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answers::AnswerSet;

/// A persisted OSDI questionnaire result: the derived score plus the raw answers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OsdiSubmission {
    pub id: Uuid,
    pub user_id: String,
    pub score: f64,
    #[ts(type = "Record<string, number>")]
    pub answers: AnswerSet,
    pub created_at: jiff::Timestamp,
}

impl OsdiSubmission {
    pub fn new(user_id: &str, score: f64, answers: AnswerSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            score,
            answers,
            created_at: jiff::Timestamp::now(),
        }
    }
}
