use serde::{Deserialize, Serialize};

use crate::error::CaptureError;

/// Requested stream shape. Recording is video-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConstraints {
    pub width: u32,
    pub height: u32,
    pub audio: bool,
}

impl Default for StreamConstraints {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            audio: false,
        }
    }
}

/// A source of capture streams (a camera, or a feed pushed by a remote client).
pub trait CaptureDevice: Send + Sync {
    fn open(&self, constraints: &StreamConstraints) -> Result<Box<dyn CaptureStream>, CaptureError>;
}

/// An open capture stream.
pub trait CaptureStream: Send {
    /// Container MIME type of the encoded data (e.g. `video/webm`).
    fn mime_type(&self) -> &str;

    /// Take all encoded data produced since the last call. May be empty.
    fn take_data(&mut self) -> Vec<u8>;

    /// Release the underlying hardware tracks. Must be idempotent.
    fn stop_tracks(&mut self);
}
