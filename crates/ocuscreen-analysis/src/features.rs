//! Blink and redness features from per-frame face observations.
//!
//! Landmark detection happens upstream; this module consumes one observation
//! per decoded frame and reduces the series to the four features the risk
//! model is trained on.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AnalysisError;

/// Frame rate assumed when the container does not report one.
pub const FALLBACK_FPS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Six-point eye aspect ratio.
///
/// Points are ordered outer corner, two upper lid points, inner corner, two
/// lower lid points: `(|p2−p6| + |p3−p5|) / (2·|p1−p4|)`.
pub fn eye_aspect_ratio(p: &[Point; 6]) -> f64 {
    (p[1].distance(&p[5]) + p[2].distance(&p[4])) / (2.0 * p[0].distance(&p[3]) + 1e-6)
}

/// One decoded frame. `ear` is `None` when no face was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FrameObservation {
    pub ear: Option<f64>,
    /// Mean red fraction `R/(R+G+B)` over visible sclera pixels.
    pub redness: Option<f64>,
}

impl FrameObservation {
    /// Average both eyes' aspect ratios into one observation.
    pub fn from_eyes(left: &[Point; 6], right: &[Point; 6], redness: Option<f64>) -> Self {
        Self {
            ear: Some((eye_aspect_ratio(left) + eye_aspect_ratio(right)) / 2.0),
            redness,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BlinkParams {
    /// An eye counts as closed below this aspect ratio.
    pub ear_threshold: f64,
    /// Consecutive closed frames needed for a blink.
    pub min_closed_frames: u32,
    /// A blink whose lowest aspect ratio stays above this is incomplete.
    pub incomplete_cutoff: f64,
}

impl Default for BlinkParams {
    fn default() -> Self {
        Self {
            ear_threshold: 0.22,
            min_closed_frames: 2,
            incomplete_cutoff: 0.18,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VideoFeatures {
    pub duration_sec: f64,
    pub blinks: u32,
    pub blink_rate_bpm: f64,
    pub incomplete_blink_ratio: f64,
    pub avg_ibi_sec: f64,
    pub redness_index: f64,
}

/// A frame series as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FrameSeries {
    pub fps: f64,
    pub frames: Vec<FrameObservation>,
    #[serde(default)]
    pub params: Option<BlinkParams>,
}

impl FrameSeries {
    pub fn extract(&self) -> Result<VideoFeatures, AnalysisError> {
        extract_features(&self.frames, self.fps, &self.params.unwrap_or_default())
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Reduce a frame series to blink and redness features.
///
/// A blink is a run of at least `min_closed_frames` frames below the EAR
/// threshold, counted on the first open frame after it. Frames without a
/// face still count toward duration but leave the blink state untouched.
pub fn extract_features(
    frames: &[FrameObservation],
    fps: f64,
    params: &BlinkParams,
) -> Result<VideoFeatures, AnalysisError> {
    let fps = if fps.is_finite() && fps > 0.0 {
        fps
    } else {
        FALLBACK_FPS
    };

    let mut blinks = 0u32;
    let mut incomplete = 0u32;
    let mut closed_run = 0u32;
    let mut min_ear = 1.0f64;
    let mut last_blink_frame: Option<usize> = None;
    let mut ibis = Vec::new();
    let mut reds = Vec::new();

    for (index, frame) in frames.iter().enumerate() {
        let frame_no = index + 1;

        if let Some(ear) = frame.ear {
            if !ear.is_finite() || ear < 0.0 {
                return Err(AnalysisError::InvalidFrames(format!(
                    "frame {frame_no}: eye aspect ratio {ear} is not a non-negative number"
                )));
            }
            if ear < params.ear_threshold {
                closed_run += 1;
                min_ear = min_ear.min(ear);
            } else {
                if closed_run >= params.min_closed_frames {
                    blinks += 1;
                    if min_ear > params.incomplete_cutoff {
                        incomplete += 1;
                    }
                    if let Some(last) = last_blink_frame {
                        ibis.push((frame_no - last) as f64 / fps);
                    }
                    last_blink_frame = Some(frame_no);
                }
                closed_run = 0;
                min_ear = 1.0;
            }
        }

        if let Some(redness) = frame.redness.filter(|r| r.is_finite()) {
            reds.push(redness);
        }
    }

    let duration = frames.len() as f64 / fps;
    let blink_rate = if duration > 0.0 {
        f64::from(blinks) / duration * 60.0
    } else {
        0.0
    };
    let incomplete_ratio = if blinks > 0 {
        f64::from(incomplete) / f64::from(blinks)
    } else {
        0.0
    };

    Ok(VideoFeatures {
        duration_sec: round_to(duration, 2),
        blinks,
        blink_rate_bpm: round_to(blink_rate, 2),
        incomplete_blink_ratio: round_to(incomplete_ratio, 3),
        avg_ibi_sec: round_to(mean(&ibis), 2),
        redness_index: round_to(mean(&reds), 3),
    })
}
