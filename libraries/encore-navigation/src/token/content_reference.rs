//! Content references for the remote-resolution protocol

use crate::error::{Result, TokenError};
use encore_core::{ArtistId, PlaybackContext, PlaylistId, TrackId};
use std::fmt;
use std::str::FromStr;

/// Separator of the current format: `artist::a-1`
///
/// Multi-character so entity ids containing single hyphens stay unambiguous.
pub const CURRENT_SEPARATOR: &str = "::";

/// First segment of the legacy format: `encore-artist-a1`
pub const LEGACY_PREFIX: &str = "encore";

/// Legacy literal for "everything"
pub const LEGACY_ALL_SENTINEL: &str = "ALL_SONGS";

/// What a content reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    All,
    Artist,
    Playlist,
    Track,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::All => "all",
            ContentKind::Artist => "artist",
            ContentKind::Playlist => "playlist",
            ContentKind::Track => "track",
        }
    }
}

impl FromStr for ContentKind {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(ContentKind::All),
            "artist" => Ok(ContentKind::Artist),
            "playlist" => Ok(ContentKind::Playlist),
            "track" => Ok(ContentKind::Track),
            other => Err(TokenError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected content: `{kind, entityId}`
///
/// `All` carries an empty entity id; every other kind requires one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentReference {
    kind: ContentKind,
    entity_id: String,
}

impl ContentReference {
    pub fn all() -> Self {
        Self {
            kind: ContentKind::All,
            entity_id: String::new(),
        }
    }

    pub fn artist(id: &ArtistId) -> Self {
        Self::entity(ContentKind::Artist, id.as_str())
    }

    pub fn playlist(id: &PlaylistId) -> Self {
        Self::entity(ContentKind::Playlist, id.as_str())
    }

    pub fn track(id: &TrackId) -> Self {
        Self::entity(ContentKind::Track, id.as_str())
    }

    fn entity(kind: ContentKind, id: &str) -> Self {
        Self {
            kind,
            entity_id: id.to_string(),
        }
    }

    /// Validate and build from parsed parts
    fn from_parts(kind: ContentKind, entity_id: &str) -> Result<Self> {
        match kind {
            ContentKind::All => Ok(Self::all()),
            _ if entity_id.is_empty() => Err(TokenError::MissingEntity(kind.to_string())),
            _ => Ok(Self::entity(kind, entity_id)),
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    /// Context this reference navigates within
    pub fn context(&self) -> PlaybackContext {
        match self.kind {
            ContentKind::All => PlaybackContext::All,
            ContentKind::Artist => PlaybackContext::Artist(ArtistId::new(self.entity_id.as_str())),
            ContentKind::Playlist => {
                PlaybackContext::Playlist(PlaylistId::new(self.entity_id.as_str()))
            }
            ContentKind::Track => PlaybackContext::Single,
        }
    }

    /// The track a `Single` context is anchored on
    pub fn anchor(&self) -> Option<TrackId> {
        match self.kind {
            ContentKind::Track => Some(TrackId::new(self.entity_id.as_str())),
            _ => None,
        }
    }

    /// Current wire format
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.kind, CURRENT_SEPARATOR, self.entity_id)
    }

    /// Legacy wire format, still accepted from older clients
    pub fn encode_legacy(&self) -> String {
        format!("{}-{}-{}", LEGACY_PREFIX, self.kind, self.entity_id)
    }

    /// Parse either format
    ///
    /// Priority: legacy sentinel, then the current separator, then the
    /// legacy hyphen split (second segment is the kind, the remainder is the
    /// entity id).
    pub fn decode(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(TokenError::Empty);
        }
        if raw == LEGACY_ALL_SENTINEL {
            return Ok(Self::all());
        }

        if let Some((kind, entity_id)) = raw.split_once(CURRENT_SEPARATOR) {
            if let Ok(kind) = kind.parse::<ContentKind>() {
                return Self::from_parts(kind, entity_id);
            }
        }

        Self::decode_legacy(raw)
    }

    fn decode_legacy(raw: &str) -> Result<Self> {
        let mut segments = raw.splitn(3, '-');
        let _prefix = segments.next();
        let kind = segments
            .next()
            .ok_or_else(|| TokenError::UnknownKind(raw.to_string()))?
            .parse::<ContentKind>()?;
        let entity_id = segments.next().unwrap_or_default();

        Self::from_parts(kind, entity_id)
    }
}

impl fmt::Display for ContentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for ContentReference {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}
