//! Navigation tokens for the directive protocol

use crate::error::{Result, TokenError};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use encore_core::{ArtistId, PlaybackContext, PlaylistId, Resolution, TrackId};
use serde::{Deserialize, Serialize};

/// Track + context, round-tripped through the voice platform
///
/// The platform hands the token back on every player event, which is how a
/// stateless server knows what is playing and where to go next.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationToken {
    pub track_id: TrackId,
    pub context: PlaybackContext,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    track_id: String,
    context: String,
}

impl NavigationToken {
    pub fn new(track_id: TrackId, context: PlaybackContext) -> Self {
        Self { track_id, context }
    }

    /// Same context, different track
    pub fn with_track(&self, track_id: TrackId) -> Self {
        Self {
            track_id,
            context: self.context.clone(),
        }
    }

    /// URL-safe, unpadded base64 of the JSON envelope
    pub fn encode(&self) -> String {
        let envelope = Envelope {
            track_id: self.track_id.as_str().to_string(),
            context: context_to_string(&self.context),
        };
        // Serializing two strings cannot fail
        let json = serde_json::to_vec(&envelope).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    pub fn decode(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TokenError::Empty);
        }

        let bytes = URL_SAFE_NO_PAD.decode(raw)?;
        let envelope: Envelope = serde_json::from_slice(&bytes)?;
        if envelope.track_id.is_empty() {
            return Err(TokenError::Empty);
        }

        Ok(Self {
            track_id: TrackId::new(envelope.track_id),
            context: context_from_str(&envelope.context)?,
        })
    }

    /// Decode an optional token from a request
    ///
    /// Missing → `NotFound`, malformed → `Invalid` (logged).
    pub fn resolve(raw: Option<&str>) -> Resolution<Self> {
        let Some(raw) = raw else {
            return Resolution::NotFound;
        };
        match Self::decode(raw) {
            Ok(token) => Resolution::Found(token),
            Err(e) => {
                tracing::debug!(error = %e, "Discarding undecodable navigation token");
                Resolution::Invalid
            }
        }
    }
}

/// Context string embedded in tokens: `all`, `artist:<id>`, `playlist:<id>`, `single`
pub fn context_to_string(context: &PlaybackContext) -> String {
    match context {
        PlaybackContext::All => "all".to_string(),
        PlaybackContext::Artist(id) => format!("artist:{id}"),
        PlaybackContext::Playlist(id) => format!("playlist:{id}"),
        PlaybackContext::Single => "single".to_string(),
    }
}

/// Inverse of [`context_to_string`]
pub fn context_from_str(s: &str) -> Result<PlaybackContext> {
    match s {
        "all" => return Ok(PlaybackContext::All),
        "single" => return Ok(PlaybackContext::Single),
        _ => {}
    }

    match s.split_once(':') {
        Some(("artist", id)) if !id.is_empty() => Ok(PlaybackContext::Artist(ArtistId::new(id))),
        Some(("playlist", id)) if !id.is_empty() => {
            Ok(PlaybackContext::Playlist(PlaylistId::new(id)))
        }
        _ => Err(TokenError::UnknownContext(s.to_string())),
    }
}
