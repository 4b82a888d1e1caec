//! ocuscreen-capture
//!
//! Video recording sessions. A session acquires a stream from a
//! [`device::CaptureDevice`], buffers its data on a fixed timeslice, and runs
//! a one-second countdown that stops the recording automatically.
//!
//! ```text
//!   Idle ──start──▶ Recording ──stop / countdown==0──▶ Stopped
//! ```
//!
//! Stopped is terminal. Dropping a session in any state cancels its timers
//! and stops the stream's tracks.

pub mod device;
pub mod error;
pub mod push;
pub mod session;

pub use device::{CaptureDevice, CaptureStream, StreamConstraints};
pub use error::CaptureError;
pub use push::{PushDevice, PushFeed};
pub use session::{
    RecordingOutcome, RecordingSession, SessionConfig, SessionState, SessionStatus, StopReason,
};
