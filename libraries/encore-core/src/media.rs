/// Stream and artwork URL formatting
use crate::types::TrackId;

/// Builds media URLs for tracks
///
/// Pure formatting, no I/O. The audio and artwork files themselves are served
/// by a separate asset host rooted at `base_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrls {
    base_url: String,
}

impl MediaUrls {
    /// Create a builder rooted at `base_url` (trailing slashes are ignored)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Audio stream URL for a track
    pub fn stream_url(&self, track_id: &TrackId) -> String {
        format!("{}/stream/{}", self.base_url, track_id)
    }

    /// Cover art URL for a track
    pub fn art_url(&self, track_id: &TrackId) -> String {
        format!("{}/art/{}", self.base_url, track_id)
    }
}
