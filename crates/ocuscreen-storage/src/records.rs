use std::sync::Arc;

use aws_sdk_s3::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use ocuscreen_core::keys;
use ocuscreen_core::models::recording::RecordingRecord;
use ocuscreen_core::models::submission::OsdiSubmission;

use crate::error::StorageError;
use crate::memory::MemoryStore;
use crate::objects;

/// Where records are persisted. Every record type is insert-only: one JSON
/// object per record, keyed by user and record id.
#[derive(Clone)]
pub enum RecordStore {
    S3 { client: Client, bucket: String },
    Memory(Arc<MemoryStore>),
}

impl RecordStore {
    pub fn s3(client: Client, bucket: impl Into<String>) -> Self {
        Self::S3 {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn memory() -> Self {
        Self::Memory(Arc::new(MemoryStore::new()))
    }

    pub fn backend(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::Memory(_) => "memory",
        }
    }

    async fn insert<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let body = serde_json::to_vec(value)?;
        let result = match self {
            Self::S3 { client, bucket } => {
                objects::put_object_if_absent(client, bucket, key, body, Some("application/json"))
                    .await
            }
            Self::Memory(store) => store.put_if_absent(key, body).await,
        };
        match &result {
            Ok(()) => info!(key, backend = self.backend(), "record inserted"),
            Err(e) => warn!(key, backend = self.backend(), error = %e, "record insert failed"),
        }
        result
    }

    async fn load_all<T: DeserializeOwned>(&self, prefix: &str) -> Result<Vec<T>, StorageError> {
        let mut records = Vec::new();
        match self {
            Self::S3 { client, bucket } => {
                for key in objects::list_objects(client, bucket, prefix).await? {
                    let body = objects::get_object(client, bucket, &key).await?;
                    records.push(serde_json::from_slice(&body)?);
                }
            }
            Self::Memory(store) => {
                for key in store.list(prefix).await {
                    let body = store.get(&key).await?;
                    records.push(serde_json::from_slice(&body)?);
                }
            }
        }
        Ok(records)
    }

    /// Insert one OSDI submission. Returns the storage key.
    pub async fn insert_osdi(&self, submission: &OsdiSubmission) -> Result<String, StorageError> {
        let key = keys::osdi_submission(&submission.user_id, submission.id);
        self.insert(&key, submission).await?;
        Ok(key)
    }

    /// Insert one recording-session metadata record. Returns the storage key.
    pub async fn insert_recording(&self, record: &RecordingRecord) -> Result<String, StorageError> {
        let key = keys::recording(&record.user_id, record.id);
        self.insert(&key, record).await?;
        Ok(key)
    }

    /// A user's OSDI submissions, oldest first.
    pub async fn list_osdi(&self, user_id: &str) -> Result<Vec<OsdiSubmission>, StorageError> {
        let mut submissions: Vec<OsdiSubmission> =
            self.load_all(&keys::osdi_user_prefix(user_id)).await?;
        submissions.sort_by_key(|s| s.created_at);
        Ok(submissions)
    }

    /// A user's recording records, oldest first.
    pub async fn list_recordings(&self, user_id: &str) -> Result<Vec<RecordingRecord>, StorageError> {
        let mut records: Vec<RecordingRecord> =
            self.load_all(&keys::recording_user_prefix(user_id)).await?;
        records.sort_by_key(|r| r.created_at);
        Ok(records)
    }
}
