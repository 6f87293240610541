//! Storage collaborator contract
//!
//! Navigation never owns data. Everything it knows about the library comes
//! through this trait, read fresh on every request.

use crate::error::Result;
use crate::types::{ArtistId, Playlist, PlaylistId, Track, TrackId};
use async_trait::async_trait;

/// Read-only view of the music library
///
/// Implementations must be deterministic for a given storage state:
/// - `list_all_track_ids` and `list_track_ids_by_artist` return newest-added first
/// - `list_track_ids_for_playlist` returns the stored position order
/// - unknown artist or playlist ids yield an empty list, not an error
///
/// `Err` is reserved for transport/storage failures.
#[async_trait]
pub trait Catalog: Send + Sync {
    // ========================================================================
    // Ordered id sequences
    // ========================================================================

    /// Every track id, newest added first
    async fn list_all_track_ids(&self) -> Result<Vec<TrackId>>;

    /// Track ids for one artist, newest added first
    async fn list_track_ids_by_artist(&self, artist_id: &ArtistId) -> Result<Vec<TrackId>>;

    /// Track ids of a playlist in stored position order
    async fn list_track_ids_for_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<TrackId>>;

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Get track by ID
    async fn get_track(&self, id: &TrackId) -> Result<Option<Track>>;

    // ========================================================================
    // Search (first match wins)
    // ========================================================================

    /// Tracks whose title contains `query`
    async fn search_tracks_by_title(&self, query: &str) -> Result<Vec<Track>>;

    /// Tracks whose artist name or artist keywords contain `query`
    async fn search_tracks_by_artist(&self, query: &str) -> Result<Vec<Track>>;

    /// Playlists whose name contains `query`
    async fn search_playlists_by_name(&self, query: &str) -> Result<Vec<Playlist>>;
}
