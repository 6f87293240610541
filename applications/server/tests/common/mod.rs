//! Common test utilities and fixtures
//!
//! Every app is backed by a REAL SQLite file in a temp dir, migrated and
//! seeded through the same fixture loader the `seed` command uses.
#![allow(dead_code)]

use async_trait::async_trait;
use encore_core::{
    ArtistId, Catalog, EncoreError, Playlist, PlaylistId, Track, TrackId,
};
use encore_navigation::NavigationToken;
use encore_server::{AppState, ServerConfig};
use encore_storage::{
    artists::Artist,
    seed::{CatalogFixture, PlaylistFixture},
    SqliteCatalog,
};
use std::sync::Arc;
use tempfile::TempDir;

pub const MEDIA_BASE: &str = "https://media.test";

/// App state over a temporary database
pub struct TestApp {
    pub state: AppState,
    _temp_dir: TempDir,
}

pub async fn create_test_app(fixture: &CatalogFixture) -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = encore_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    encore_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    encore_storage::seed::load(&pool, fixture)
        .await
        .expect("Failed to seed catalog");

    let state = AppState::from_catalog(Arc::new(SqliteCatalog::new(pool)), &test_config());

    TestApp {
        state,
        _temp_dir: temp_dir,
    }
}

pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.media.base_url = MEDIA_BASE.to_string();
    config.skill.name = "Encore".to_string();
    config
}

fn artist(id: &str, name: &str, keywords: Option<&str>) -> Artist {
    Artist {
        id: ArtistId::new(id),
        name: name.to_string(),
        keywords: keywords.map(str::to_string),
    }
}

fn track(id: &str, title: &str, artist_id: &str, added_at: i64) -> Track {
    Track {
        id: TrackId::new(id),
        title: title.to_string(),
        artist: None,
        artist_id: Some(ArtistId::new(artist_id)),
        album: Some("Collected".to_string()),
        duration_ms: Some(200_000),
        added_at,
    }
}

/// Library used across the server suites
///
/// All (newest first): t1, t2, t3, t4.
/// Artist a1: t1, t3. Artist a3 has only t4.
/// Playlist p1 "Road Trip": t3, t1, t2. Playlist p2 "Quiet Hours" is empty.
pub fn library() -> CatalogFixture {
    CatalogFixture {
        artists: vec![
            artist("a1", "Nina Simone", Some("jazz blues")),
            artist("a2", "Miles Davis", None),
            artist("a3", "Solo Act", None),
        ],
        tracks: vec![
            track("t1", "Feeling Good", "a1", 400),
            track("t2", "So What", "a2", 300),
            track("t3", "Sinnerman", "a1", 200),
            track("t4", "Lonely Road", "a3", 100),
        ],
        playlists: vec![
            PlaylistFixture {
                id: PlaylistId::new("p1"),
                name: "Road Trip".to_string(),
                track_ids: vec![TrackId::new("t3"), TrackId::new("t1"), TrackId::new("t2")],
            },
            PlaylistFixture {
                id: PlaylistId::new("p2"),
                name: "Quiet Hours".to_string(),
                track_ids: vec![],
            },
        ],
    }
}

/// Three tracks by three artists, newest first t1, t2, t3
pub fn three_track_library() -> CatalogFixture {
    CatalogFixture {
        artists: vec![
            artist("a1", "First", None),
            artist("a2", "Second", None),
            artist("a3", "Third", None),
        ],
        tracks: vec![
            track("t1", "One", "a1", 300),
            track("t2", "Two", "a2", 200),
            track("t3", "Three", "a3", 100),
        ],
        playlists: vec![],
    }
}

pub fn token(track_id: &str, context: encore_core::PlaybackContext) -> String {
    NavigationToken::new(TrackId::new(track_id), context).encode()
}

/// Catalog whose every call fails
pub struct FailingCatalog;

fn outage() -> EncoreError {
    EncoreError::storage("database unavailable")
}

#[async_trait]
impl Catalog for FailingCatalog {
    async fn list_all_track_ids(&self) -> encore_core::Result<Vec<TrackId>> {
        Err(outage())
    }

    async fn list_track_ids_by_artist(&self, _: &ArtistId) -> encore_core::Result<Vec<TrackId>> {
        Err(outage())
    }

    async fn list_track_ids_for_playlist(
        &self,
        _: &PlaylistId,
    ) -> encore_core::Result<Vec<TrackId>> {
        Err(outage())
    }

    async fn get_track(&self, _: &TrackId) -> encore_core::Result<Option<Track>> {
        Err(outage())
    }

    async fn search_tracks_by_title(&self, _: &str) -> encore_core::Result<Vec<Track>> {
        Err(outage())
    }

    async fn search_tracks_by_artist(&self, _: &str) -> encore_core::Result<Vec<Track>> {
        Err(outage())
    }

    async fn search_playlists_by_name(&self, _: &str) -> encore_core::Result<Vec<Playlist>> {
        Err(outage())
    }
}

pub fn failing_state() -> AppState {
    AppState::from_catalog(Arc::new(FailingCatalog), &test_config())
}

/// Catalog whose every call panics
pub struct PanickingCatalog;

#[async_trait]
impl Catalog for PanickingCatalog {
    async fn list_all_track_ids(&self) -> encore_core::Result<Vec<TrackId>> {
        panic!("catalog exploded")
    }

    async fn list_track_ids_by_artist(&self, _: &ArtistId) -> encore_core::Result<Vec<TrackId>> {
        panic!("catalog exploded")
    }

    async fn list_track_ids_for_playlist(
        &self,
        _: &PlaylistId,
    ) -> encore_core::Result<Vec<TrackId>> {
        panic!("catalog exploded")
    }

    async fn get_track(&self, _: &TrackId) -> encore_core::Result<Option<Track>> {
        panic!("catalog exploded")
    }

    async fn search_tracks_by_title(&self, _: &str) -> encore_core::Result<Vec<Track>> {
        panic!("catalog exploded")
    }

    async fn search_tracks_by_artist(&self, _: &str) -> encore_core::Result<Vec<Track>> {
        panic!("catalog exploded")
    }

    async fn search_playlists_by_name(&self, _: &str) -> encore_core::Result<Vec<Playlist>> {
        panic!("catalog exploded")
    }
}

pub fn panicking_state() -> AppState {
    AppState::from_catalog(Arc::new(PanickingCatalog), &test_config())
}
