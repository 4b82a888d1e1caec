use std::fmt;

/// A recorded or uploaded video, held in memory between steps.
///
/// Never persisted by this system; only metadata derived from it is stored.
#[derive(Clone, PartialEq, Eq)]
pub struct VideoArtifact {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: Option<String>,
}

impl VideoArtifact {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when the MIME type names a video container (`video/*`),
    /// ignoring parameters such as `;codecs=vp8`.
    pub fn is_video(&self) -> bool {
        is_video_mime(&self.mime_type)
    }
}

pub fn is_video_mime(mime: &str) -> bool {
    mime.split(';')
        .next()
        .map(|essence| essence.trim().to_ascii_lowercase())
        .is_some_and(|essence| {
            essence
                .strip_prefix("video/")
                .is_some_and(|subtype| !subtype.is_empty())
        })
}

// Bytes are elided so artifacts can be logged.
impl fmt::Debug for VideoArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoArtifact")
            .field("len", &self.bytes.len())
            .field("mime_type", &self.mime_type)
            .field("file_name", &self.file_name)
            .finish()
    }
}
