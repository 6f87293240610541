/// Track domain type
use super::ids::{ArtistId, TrackId};
use serde::{Deserialize, Serialize};

/// Immutable track snapshot as read from storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: Option<String>, // Denormalized
    pub artist_id: Option<ArtistId>,
    pub album: Option<String>,
    pub duration_ms: Option<i64>,

    /// Unix seconds; drives newest-first ordering
    pub added_at: i64,
}

impl Track {
    /// Artist name, or a placeholder when the track has none
    pub fn artist_or_unknown(&self) -> &str {
        self.artist.as_deref().unwrap_or("Unknown Artist")
    }
}
