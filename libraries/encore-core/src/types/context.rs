//! Playback context: the ordered collection bounding navigation

use super::ids::{ArtistId, PlaylistId};
use serde::{Deserialize, Serialize};

/// Which ordered track sequence a playing track belongs to
///
/// Protocol adapters parse their own string encodings into this type at the
/// edge; nothing past that point deals with prefixes or separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum PlaybackContext {
    /// Whole library, newest added first
    All,
    /// One artist's tracks, newest added first
    Artist(ArtistId),
    /// One playlist in stored order
    Playlist(PlaylistId),
    /// A single ad hoc track; never has neighbours
    Single,
}

impl PlaybackContext {
    /// True for the closed single-track context
    pub fn is_single(&self) -> bool {
        matches!(self, PlaybackContext::Single)
    }
}
