//! Context resolution
//!
//! Turns a [`PlaybackContext`] into the ordered track-id sequence that bounds
//! navigation. Storage is the only source of truth; a sequence is rebuilt for
//! every request and never cached.

use encore_core::{Catalog, PlaybackContext, Playlist, Resolution, Track, TrackId};
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered, immutable list of track ids for one context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    ids: Vec<TrackId>,
}

impl Sequence {
    /// Build a sequence, keeping only the first occurrence of each id
    ///
    /// A token carries just a track id, so a repeated id would make its
    /// position ambiguous.
    pub fn new(ids: Vec<TrackId>) -> Self {
        let mut seen = HashSet::with_capacity(ids.len());
        let ids = ids.into_iter().filter(|id| seen.insert(id.clone())).collect();
        Self { ids }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn first(&self) -> Option<&TrackId> {
        self.ids.first()
    }

    pub fn get(&self, index: usize) -> Option<&TrackId> {
        self.ids.get(index)
    }

    /// Index of `track_id` (queue position), if present
    pub fn position(&self, track_id: &TrackId) -> Option<usize> {
        self.ids.iter().position(|id| id == track_id)
    }

    pub fn ids(&self) -> &[TrackId] {
        &self.ids
    }
}

/// Resolves contexts and tracks against the catalog
///
/// Storage failures are logged and reported as "nothing there": an empty
/// sequence or `Resolution::NotFound`. There is no separate outage outcome.
#[derive(Clone)]
pub struct ContextResolver {
    catalog: Arc<dyn Catalog>,
}

impl ContextResolver {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Ordered ids for a context
    ///
    /// - `All`: every track, newest first
    /// - `Artist`: that artist's tracks, newest first
    /// - `Playlist`: stored position order
    /// - `Single`: empty; the lone track travels next to the context, never
    ///   inside a library sequence
    ///
    /// Unknown artists and playlists resolve to an empty sequence.
    pub async fn resolve(&self, context: &PlaybackContext) -> Sequence {
        let result = match context {
            PlaybackContext::All => self.catalog.list_all_track_ids().await,
            PlaybackContext::Artist(artist_id) => {
                self.catalog.list_track_ids_by_artist(artist_id).await
            }
            PlaybackContext::Playlist(playlist_id) => {
                self.catalog.list_track_ids_for_playlist(playlist_id).await
            }
            PlaybackContext::Single => return Sequence::empty(),
        };

        match result {
            Ok(ids) => Sequence::new(ids),
            Err(e) => {
                tracing::warn!(?context, error = %e, "Context resolution failed; treating as empty");
                Sequence::empty()
            }
        }
    }

    /// Look up a single track
    pub async fn track(&self, track_id: &TrackId) -> Resolution<Track> {
        match self.catalog.get_track(track_id).await {
            Ok(track) => track.into(),
            Err(e) => {
                tracing::warn!(track_id = %track_id, error = %e, "Track lookup failed; treating as not found");
                Resolution::NotFound
            }
        }
    }

    /// First track whose title contains `query`
    pub async fn first_title_match(&self, query: &str) -> Option<Track> {
        first_or_log(self.catalog.search_tracks_by_title(query).await, "title", query)
    }

    /// First track whose artist name or keywords contain `query`
    pub async fn first_artist_match(&self, query: &str) -> Option<Track> {
        first_or_log(self.catalog.search_tracks_by_artist(query).await, "artist", query)
    }

    /// First playlist whose name contains `query`
    pub async fn first_playlist_match(&self, query: &str) -> Option<Playlist> {
        first_or_log(self.catalog.search_playlists_by_name(query).await, "playlist", query)
    }
}

fn first_or_log<T>(result: encore_core::Result<Vec<T>>, field: &str, query: &str) -> Option<T> {
    match result {
        Ok(hits) => hits.into_iter().next(),
        Err(e) => {
            tracing::warn!(field, query, error = %e, "Search failed; treating as no match");
            None
        }
    }
}
