//! Playlist types

use super::ids::PlaylistId;
use serde::{Deserialize, Serialize};

/// A named, explicitly ordered playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
}
