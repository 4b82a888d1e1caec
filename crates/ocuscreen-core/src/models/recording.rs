use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Metadata of a completed recording session. The video itself is not stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordingRecord {
    pub id: Uuid,
    pub user_id: String,
    /// Id of the story that was read aloud during the recording.
    pub story_category: String,
    pub duration_secs: u32,
    pub created_at: jiff::Timestamp,
}

impl RecordingRecord {
    pub fn new(user_id: &str, story_category: &str, duration_secs: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            story_category: story_category.to_string(),
            duration_secs,
            created_at: jiff::Timestamp::now(),
        }
    }
}
