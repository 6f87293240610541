//! Catalog fixture loading
//!
//! A fixture is a JSON document describing artists, tracks and playlists.
//! Used by the `seed` CLI command and by integration tests.

use crate::{artists, artists::Artist, playlists, tracks, StorageError};
use encore_core::types::{Playlist, PlaylistId, Track, TrackId};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::path::Path;

/// Playlist with its ordered track ids
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistFixture {
    pub id: PlaylistId,
    pub name: String,
    #[serde(default)]
    pub track_ids: Vec<TrackId>,
}

/// Complete catalog snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFixture {
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub playlists: Vec<PlaylistFixture>,
}

/// Summary of what a load inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub artists: usize,
    pub tracks: usize,
    pub playlists: usize,
}

impl CatalogFixture {
    /// Parse a fixture from a JSON file
    pub async fn from_file(path: &Path) -> Result<Self, StorageError> {
        let contents = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Insert a fixture into the database
///
/// Artists go first so track foreign keys resolve, playlists last.
pub async fn load(pool: &SqlitePool, fixture: &CatalogFixture) -> Result<SeedReport, StorageError> {
    for artist in &fixture.artists {
        artists::insert(pool, artist).await?;
    }

    for track in &fixture.tracks {
        tracks::insert(pool, track).await?;
    }

    for playlist in &fixture.playlists {
        playlists::insert(
            pool,
            &Playlist {
                id: playlist.id.clone(),
                name: playlist.name.clone(),
            },
        )
        .await?;

        for track_id in &playlist.track_ids {
            if !playlists::add_track(pool, &playlist.id, track_id).await? {
                tracing::warn!(
                    playlist_id = %playlist.id,
                    track_id = %track_id,
                    "Duplicate playlist entry skipped"
                );
            }
        }
    }

    let report = SeedReport {
        artists: fixture.artists.len(),
        tracks: fixture.tracks.len(),
        playlists: fixture.playlists.len(),
    };

    tracing::info!(
        artists = report.artists,
        tracks = report.tracks,
        playlists = report.playlists,
        "Catalog fixture loaded"
    );

    Ok(report)
}
