use ocuscreen_core::keys;
use ocuscreen_core::models::answers::{AnswerSet, Likert};
use ocuscreen_core::models::artifact::{VideoArtifact, is_video_mime};
use ocuscreen_core::stories;
use uuid::Uuid;

#[test]
fn answers_accept_numbers_and_numeric_strings() {
    let answers: AnswerSet = serde_json::from_str(r#"{"1": "4", "2": 0, "3": " 2 "}"#).unwrap();
    assert_eq!(answers.len(), 3);
    assert_eq!(answers[&1].value(), 4);
    assert_eq!(answers[&2].value(), 0);
    assert_eq!(answers[&3].value(), 2);
}

#[test]
fn answers_reject_out_of_range_ordinals() {
    assert!(serde_json::from_str::<AnswerSet>(r#"{"1": 5}"#).is_err());
    assert!(serde_json::from_str::<AnswerSet>(r#"{"1": "often"}"#).is_err());
    assert!(Likert::new(5).is_err());
}

#[test]
fn answers_serialize_as_numbers() {
    let mut answers = AnswerSet::new();
    answers.insert(7, Likert::new(3).unwrap());
    assert_eq!(serde_json::to_string(&answers).unwrap(), r#"{"7":3}"#);
}

#[test]
fn catalog_has_four_distinct_stories() {
    let catalog = stories::catalog();
    assert_eq!(catalog.len(), 4);
    for story in catalog {
        assert_eq!(catalog.iter().filter(|s| s.id == story.id).count(), 1);
        assert!(!story.body.is_empty());
    }
    assert_eq!(stories::get_story("market").unwrap().title, "Morning at the Market");
    assert!(stories::get_story("nope").is_none());
    assert!(stories::require_story("nope").is_err());
}

#[test]
fn video_mime_detection() {
    assert!(is_video_mime("video/webm"));
    assert!(is_video_mime("video/webm;codecs=vp8"));
    assert!(is_video_mime("Video/MP4"));
    assert!(!is_video_mime("video/"));
    assert!(!is_video_mime("text/plain"));
    assert!(!is_video_mime("application/octet-stream"));

    let artifact = VideoArtifact::new(vec![1, 2, 3], "video/mp4").with_file_name("clip.mp4");
    assert!(artifact.is_video());
    assert_eq!(artifact.len(), 3);
    assert!(format!("{artifact:?}").contains("len: 3"));
}

#[test]
fn keys_are_partitioned_by_user() {
    let id = Uuid::nil();
    assert_eq!(
        keys::osdi_submission("u1", id),
        "osdi/u1/00000000-0000-0000-0000-000000000000.json"
    );
    assert!(keys::osdi_submission("u1", id).starts_with(&keys::osdi_user_prefix("u1")));
    assert!(keys::recording("u1", id).starts_with(&keys::recording_user_prefix("u1")));
}
