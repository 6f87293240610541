//! In-memory catalog fixtures for navigation tests

#![allow(dead_code)]

use async_trait::async_trait;
use encore_core::{
    ArtistId, Catalog, EncoreError, Playlist, PlaylistId, Result, Track, TrackId,
};
use std::cmp::Reverse;

/// Catalog held entirely in memory
#[derive(Default)]
pub struct MemoryCatalog {
    pub tracks: Vec<Track>,
    pub playlists: Vec<(Playlist, Vec<TrackId>)>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track; larger `added_at` means newer
    pub fn with_track(mut self, id: &str, artist_id: Option<&str>, added_at: i64) -> Self {
        self.tracks.push(Track {
            id: TrackId::new(id),
            title: format!("Title {id}"),
            artist: artist_id.map(|a| format!("Artist {a}")),
            artist_id: artist_id.map(ArtistId::new),
            album: None,
            duration_ms: Some(180_000),
            added_at,
        });
        self
    }

    pub fn with_playlist(mut self, id: &str, name: &str, track_ids: &[&str]) -> Self {
        self.playlists.push((
            Playlist {
                id: PlaylistId::new(id),
                name: name.to_string(),
            },
            track_ids.iter().map(|t| TrackId::new(*t)).collect(),
        ));
        self
    }

    fn newest_first<'a>(&self, tracks: impl Iterator<Item = &'a Track>) -> Vec<TrackId> {
        let mut tracks: Vec<_> = tracks.collect();
        tracks.sort_by_key(|t| (Reverse(t.added_at), t.id.clone()));
        tracks.into_iter().map(|t| t.id.clone()).collect()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn list_all_track_ids(&self) -> Result<Vec<TrackId>> {
        Ok(self.newest_first(self.tracks.iter()))
    }

    async fn list_track_ids_by_artist(&self, artist_id: &ArtistId) -> Result<Vec<TrackId>> {
        Ok(self.newest_first(
            self.tracks
                .iter()
                .filter(|t| t.artist_id.as_ref() == Some(artist_id)),
        ))
    }

    async fn list_track_ids_for_playlist(&self, playlist_id: &PlaylistId) -> Result<Vec<TrackId>> {
        Ok(self
            .playlists
            .iter()
            .find(|(p, _)| &p.id == playlist_id)
            .map(|(_, ids)| ids.clone())
            .unwrap_or_default())
    }

    async fn get_track(&self, id: &TrackId) -> Result<Option<Track>> {
        Ok(self.tracks.iter().find(|t| &t.id == id).cloned())
    }

    async fn search_tracks_by_title(&self, query: &str) -> Result<Vec<Track>> {
        let query = query.to_lowercase();
        Ok(self
            .tracks
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }

    async fn search_tracks_by_artist(&self, query: &str) -> Result<Vec<Track>> {
        let query = query.to_lowercase();
        Ok(self
            .tracks
            .iter()
            .filter(|t| {
                t.artist
                    .as_deref()
                    .is_some_and(|a| a.to_lowercase().contains(&query))
            })
            .cloned()
            .collect())
    }

    async fn search_playlists_by_name(&self, query: &str) -> Result<Vec<Playlist>> {
        let query = query.to_lowercase();
        Ok(self
            .playlists
            .iter()
            .filter(|(p, _)| p.name.to_lowercase().contains(&query))
            .map(|(p, _)| p.clone())
            .collect())
    }
}

/// Catalog whose every call fails, standing in for an unreachable store
pub struct FailingCatalog;

fn down<T>() -> Result<T> {
    Err(EncoreError::storage("connection refused"))
}

#[async_trait]
impl Catalog for FailingCatalog {
    async fn list_all_track_ids(&self) -> Result<Vec<TrackId>> {
        down()
    }

    async fn list_track_ids_by_artist(&self, _artist_id: &ArtistId) -> Result<Vec<TrackId>> {
        down()
    }

    async fn list_track_ids_for_playlist(&self, _playlist_id: &PlaylistId) -> Result<Vec<TrackId>> {
        down()
    }

    async fn get_track(&self, _id: &TrackId) -> Result<Option<Track>> {
        down()
    }

    async fn search_tracks_by_title(&self, _query: &str) -> Result<Vec<Track>> {
        down()
    }

    async fn search_tracks_by_artist(&self, _query: &str) -> Result<Vec<Track>> {
        down()
    }

    async fn search_playlists_by_name(&self, _query: &str) -> Result<Vec<Playlist>> {
        down()
    }
}
