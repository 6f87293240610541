use crate::{playlists, tracks};
use async_trait::async_trait;
use encore_core::{
    error::Result,
    types::{ArtistId, Playlist, PlaylistId, Track, TrackId},
    Catalog,
};
use sqlx::SqlitePool;

/// Catalog backed by a local `SQLite` database
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for SqliteCatalog {
    // Sequences
    async fn list_all_track_ids(&self) -> Result<Vec<TrackId>> {
        tracks::list_ids(&self.pool).await
    }

    async fn list_track_ids_by_artist(&self, artist_id: &ArtistId) -> Result<Vec<TrackId>> {
        tracks::list_ids_by_artist(&self.pool, artist_id).await
    }

    async fn list_track_ids_for_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<TrackId>> {
        playlists::list_track_ids(&self.pool, playlist_id).await
    }

    // Lookups
    async fn get_track(&self, id: &TrackId) -> Result<Option<Track>> {
        tracks::get_by_id(&self.pool, id).await
    }

    // Search
    async fn search_tracks_by_title(&self, query: &str) -> Result<Vec<Track>> {
        tracks::search_by_title(&self.pool, query).await
    }

    async fn search_tracks_by_artist(&self, query: &str) -> Result<Vec<Track>> {
        tracks::search_by_artist(&self.pool, query).await
    }

    async fn search_playlists_by_name(&self, query: &str) -> Result<Vec<Playlist>> {
        playlists::search_by_name(&self.pool, query).await
    }
}
