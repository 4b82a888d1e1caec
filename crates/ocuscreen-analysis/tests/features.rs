use ocuscreen_analysis::error::AnalysisError;
use ocuscreen_analysis::features::{
    BlinkParams, FrameObservation, FrameSeries, Point, extract_features, eye_aspect_ratio,
};

fn open() -> FrameObservation {
    FrameObservation {
        ear: Some(0.30),
        redness: Some(0.40),
    }
}

fn closed(ear: f64) -> FrameObservation {
    FrameObservation {
        ear: Some(ear),
        redness: None,
    }
}

/// `open_frames` open frames, then a blink of `closed_frames` at `ear`.
fn series(blinks: &[(usize, usize, f64)]) -> Vec<FrameObservation> {
    let mut frames = Vec::new();
    for &(open_frames, closed_frames, ear) in blinks {
        frames.extend(std::iter::repeat_n(open(), open_frames));
        frames.extend(std::iter::repeat_n(closed(ear), closed_frames));
    }
    frames.push(open());
    frames
}

#[test]
fn eye_aspect_ratio_of_open_and_closed_eyes() {
    let open_eye = [
        Point { x: 0.0, y: 0.0 },
        Point { x: 1.0, y: 1.0 },
        Point { x: 2.0, y: 1.0 },
        Point { x: 3.0, y: 0.0 },
        Point { x: 2.0, y: -1.0 },
        Point { x: 1.0, y: -1.0 },
    ];
    // (2 + 2) / (2 × 3)
    assert!((eye_aspect_ratio(&open_eye) - 2.0 / 3.0).abs() < 1e-5);

    let shut_eye = open_eye.map(|p| Point { x: p.x, y: 0.0 });
    assert!(eye_aspect_ratio(&shut_eye) < 1e-6);

    let frame = FrameObservation::from_eyes(&open_eye, &shut_eye, None);
    assert!((frame.ear.unwrap() - 1.0 / 3.0).abs() < 1e-5);
}

#[test]
fn counts_blinks_and_inter_blink_intervals() {
    // Blinks end on frames 13 and 33 at 10 fps.
    let frames = series(&[(10, 2, 0.10), (17, 3, 0.12)]);
    assert_eq!(frames.len(), 33);

    let features = extract_features(&frames, 10.0, &BlinkParams::default()).unwrap();
    assert_eq!(features.blinks, 2);
    assert_eq!(features.duration_sec, 3.3);
    assert_eq!(features.avg_ibi_sec, 2.0);
    assert_eq!(features.incomplete_blink_ratio, 0.0);
    // 2 blinks in 3.3 s
    assert_eq!(features.blink_rate_bpm, 36.36);
    assert_eq!(features.redness_index, 0.4);
}

#[test]
fn shallow_blinks_are_incomplete() {
    let frames = series(&[(5, 2, 0.10), (5, 2, 0.20), (5, 2, 0.19)]);
    let features = extract_features(&frames, 30.0, &BlinkParams::default()).unwrap();
    assert_eq!(features.blinks, 3);
    assert_eq!(features.incomplete_blink_ratio, 0.667);
}

#[test]
fn single_closed_frames_are_not_blinks() {
    let frames = series(&[(5, 1, 0.05), (5, 1, 0.05)]);
    let features = extract_features(&frames, 30.0, &BlinkParams::default()).unwrap();
    assert_eq!(features.blinks, 0);
    assert_eq!(features.blink_rate_bpm, 0.0);
    assert_eq!(features.avg_ibi_sec, 0.0);
}

#[test]
fn frames_without_a_face_count_toward_duration_only() {
    let mut frames = vec![closed(0.1), closed(0.1)];
    frames.push(FrameObservation::default());
    frames.push(open());
    let features = extract_features(&frames, 2.0, &BlinkParams::default()).unwrap();
    assert_eq!(features.blinks, 1);
    assert_eq!(features.duration_sec, 2.0);
}

#[test]
fn empty_series_and_missing_fps() {
    let features = extract_features(&[], 0.0, &BlinkParams::default()).unwrap();
    assert_eq!(features.duration_sec, 0.0);
    assert_eq!(features.blink_rate_bpm, 0.0);

    // 40 frames at the fallback 20 fps
    let frames = vec![open(); 40];
    assert_eq!(
        extract_features(&frames, f64::NAN, &BlinkParams::default())
            .unwrap()
            .duration_sec,
        2.0
    );
}

#[test]
fn invalid_aspect_ratios_are_rejected() {
    let frames = vec![open(), closed(-0.5)];
    assert!(matches!(
        extract_features(&frames, 30.0, &BlinkParams::default()),
        Err(AnalysisError::InvalidFrames(_))
    ));
}

#[test]
fn frame_series_deserializes_from_client_json() {
    let series: FrameSeries = serde_json::from_str(
        r#"{"fps": 10, "frames": [{"ear": 0.3, "redness": 0.41}, {"ear": 0.1}, {"ear": 0.1}, {"ear": 0.3}]}"#,
    )
    .unwrap();
    let features = series.extract().unwrap();
    assert_eq!(features.blinks, 1);
    assert_eq!(features.redness_index, 0.41);
}
