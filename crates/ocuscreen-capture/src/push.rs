//! A capture device fed by a remote client.
//!
//! The browser owns the real camera; it uploads encoded chunks which land in
//! a [`PushFeed`]. The session's collector drains the feed on its timeslice
//! exactly as it would drain a local encoder.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::device::{CaptureDevice, CaptureStream, StreamConstraints};
use crate::error::CaptureError;

#[derive(Debug, Default)]
struct FeedState {
    buffer: Vec<u8>,
    /// Total bytes accepted over the feed's lifetime.
    pushed: usize,
    open: bool,
    closed: bool,
}

/// Shared handle used by the ingest side to push media data.
#[derive(Debug, Clone)]
pub struct PushFeed {
    mime_type: String,
    limit: Option<usize>,
    shared: Arc<Mutex<FeedState>>,
}

impl PushFeed {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            limit: None,
            shared: Arc::new(Mutex::new(FeedState::default())),
        }
    }

    /// Cap the total number of bytes the feed accepts.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn state(&self) -> MutexGuard<'_, FeedState> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append encoded data. Rejected unless a stream is currently open, or
    /// when the data would take the feed past its limit.
    pub fn push(&self, data: &[u8]) -> Result<usize, CaptureError> {
        let mut state = self.state();
        if !state.open {
            return Err(CaptureError::NoStream);
        }
        if let Some(limit) = self.limit
            && state.pushed.saturating_add(data.len()) > limit
        {
            return Err(CaptureError::LimitExceeded { limit });
        }
        state.pushed += data.len();
        state.buffer.extend_from_slice(data);
        Ok(data.len())
    }

    pub fn is_open(&self) -> bool {
        self.state().open
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn device(&self) -> PushDevice {
        PushDevice { feed: self.clone() }
    }
}

pub struct PushDevice {
    feed: PushFeed,
}

impl CaptureDevice for PushDevice {
    fn open(&self, _constraints: &StreamConstraints) -> Result<Box<dyn CaptureStream>, CaptureError> {
        let mut state = self.feed.state();
        if state.closed {
            return Err(CaptureError::Acquisition("feed already closed".to_string()));
        }
        if state.open {
            return Err(CaptureError::Acquisition("feed already in use".to_string()));
        }
        state.open = true;
        Ok(Box::new(PushStream {
            feed: self.feed.clone(),
        }))
    }
}

struct PushStream {
    feed: PushFeed,
}

impl CaptureStream for PushStream {
    fn mime_type(&self) -> &str {
        self.feed.mime_type()
    }

    fn take_data(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.feed.state().buffer)
    }

    fn stop_tracks(&mut self) {
        let mut state = self.feed.state();
        if state.open {
            debug!(discarded = state.buffer.len(), "closing push feed");
        }
        state.open = false;
        state.closed = true;
        state.buffer.clear();
    }
}
