use std::sync::Arc;

use ocuscreen_core::models::answers::{AnswerSet, Likert};
use ocuscreen_core::models::recording::RecordingRecord;
use ocuscreen_core::models::submission::OsdiSubmission;
use ocuscreen_storage::error::StorageError;
use ocuscreen_storage::memory::MemoryStore;
use ocuscreen_storage::records::RecordStore;

fn answers() -> AnswerSet {
    [(1, Likert::new(2).unwrap()), (2, Likert::new(3).unwrap())]
        .into_iter()
        .collect()
}

#[tokio::test]
async fn osdi_submissions_are_listed_per_user() {
    let store = RecordStore::memory();
    let first = OsdiSubmission::new("alice", 62.5, answers());
    let second = OsdiSubmission::new("alice", 10.0, answers());
    let other = OsdiSubmission::new("bob", 0.0, answers());

    let key = store.insert_osdi(&first).await.unwrap();
    assert_eq!(key, format!("osdi/alice/{}.json", first.id));
    store.insert_osdi(&second).await.unwrap();
    store.insert_osdi(&other).await.unwrap();

    let alice = store.list_osdi("alice").await.unwrap();
    assert_eq!(alice.len(), 2);
    assert!(alice.iter().all(|s| s.user_id == "alice"));
    assert_eq!(alice[0].answers, answers());

    assert_eq!(store.list_osdi("bob").await.unwrap().len(), 1);
    assert!(store.list_osdi("carol").await.unwrap().is_empty());
}

#[tokio::test]
async fn recordings_round_trip_metadata_only() {
    let store = RecordStore::memory();
    let record = RecordingRecord::new("alice", "lighthouse", 123);
    store.insert_recording(&record).await.unwrap();

    let listed = store.list_recordings("alice").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].story_category, "lighthouse");
    assert_eq!(listed[0].duration_secs, 123);
}

#[tokio::test]
async fn records_are_insert_only() {
    let memory = Arc::new(MemoryStore::new());
    let store = RecordStore::Memory(Arc::clone(&memory));
    let record = RecordingRecord::new("alice", "market", 5);

    store.insert_recording(&record).await.unwrap();
    let err = store.insert_recording(&record).await.unwrap_err();
    assert!(matches!(err, StorageError::AlreadyExists { .. }));
    assert_eq!(memory.len().await, 1);
}

#[tokio::test]
async fn rejected_writes_surface_as_unavailable() {
    let memory = Arc::new(MemoryStore::new());
    let store = RecordStore::Memory(Arc::clone(&memory));
    memory.set_reject_writes(true);

    let err = store
        .insert_osdi(&OsdiSubmission::new("alice", 50.0, answers()))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)));
    assert!(memory.is_empty().await);
}
