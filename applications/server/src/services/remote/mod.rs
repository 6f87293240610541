//! Remote-resolution protocol adapter
//!
//! The client asks for one item at a time and echoes back the queue id it
//! was handed at initiation. The queue id is the encoded
//! [`ContentReference`], so every call is answered from storage alone.

pub mod wire;

use chrono::{Duration, SecondsFormat, Utc};
use encore_core::{ArtistId, MediaUrls, PlaylistId, Track, TrackId};
use encore_navigation::{AdjacencyEngine, ContentKind, ContentReference, Neighbor};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use wire::{
    Art, ArtSource, Content, ContentActions, ContentMetadata, Control, Entity, ErrorType,
    GetPlayableContentRequest, InitiateRequest, Item, ItemMetadata, ItemReference, ItemRequest,
    LocalizedText, PlaybackInfo, PlaybackMethod, QueueStep, RemoteRequest, RemoteResponse,
    ResponseHeader, ResponsePayload, Rules, SelectionCriteria, Stream,
};

/// Upper bound on stream validity (one year)
const MAX_STREAM_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

const PLAYBACK_METHOD: &str = "ALEXA_AUDIO_PLAYER_QUEUE";

/// A track ready to hand out, with its position flags
#[derive(Debug, Clone)]
pub struct QueueItem {
    pub track: Track,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Successful initiation
#[derive(Debug, Clone)]
pub struct Initiation {
    /// Encoded content reference the client will echo back
    pub queue_id: String,
    pub first: QueueItem,
}

pub struct RemoteAdapter {
    engine: AdjacencyEngine,
    media: MediaUrls,
    stream_ttl_seconds: i64,
}

impl RemoteAdapter {
    pub fn new(engine: AdjacencyEngine, media: MediaUrls, stream_ttl_seconds: u64) -> Self {
        let stream_ttl_seconds = i64::try_from(stream_ttl_seconds)
            .unwrap_or(MAX_STREAM_TTL_SECONDS)
            .min(MAX_STREAM_TTL_SECONDS);

        Self {
            engine,
            media,
            stream_ttl_seconds,
        }
    }

    /// Answer one protocol request
    ///
    /// Never fails: anything not understood becomes an `INVALID_REQUEST`
    /// error response.
    pub async fn handle(&self, request: RemoteRequest) -> RemoteResponse {
        let RemoteRequest { header, payload } = request;
        debug!(
            name = %header.name,
            message_id = ?header.message_id,
            "Remote request"
        );

        let response_name = format!("{}.Response", header.name);
        let respond = |payload: ResponsePayload| RemoteResponse {
            header: ResponseHeader::new(header.namespace.clone(), response_name.clone()),
            payload,
        };

        match header.name.as_str() {
            "GetPlayableContent" => {
                let Some(request) = parse_payload::<GetPlayableContentRequest>(payload, true) else {
                    return RemoteResponse::unrecognized();
                };
                match self.select(request.selection_criteria).await {
                    Some(reference) => respond(ResponsePayload::Content {
                        content: content_for(&reference),
                    }),
                    None => RemoteResponse::error(
                        ErrorType::ContentNotFound,
                        "Requested content could not be found",
                    ),
                }
            }
            "Initiate" => {
                let Some(request) = parse_payload::<InitiateRequest>(payload, true) else {
                    return RemoteResponse::unrecognized();
                };
                match self.initiate(request.content_id.as_deref()).await {
                    Some(initiation) => respond(ResponsePayload::Initiate {
                        playback_method: PlaybackMethod {
                            kind: PLAYBACK_METHOD.to_string(),
                            id: initiation.queue_id,
                            rules: Rules {
                                feedback_enabled: false,
                            },
                            first_item: self.item(&initiation.first),
                        },
                    }),
                    None => RemoteResponse::error(
                        ErrorType::ContentNotFound,
                        "Requested content could not be found",
                    ),
                }
            }
            "GetItem" => {
                let Some(request) = parse_payload::<ItemRequest>(payload, false) else {
                    return RemoteResponse::unrecognized();
                };
                match self.current_item(&request.current_item_reference).await {
                    Some(queued) => respond(ResponsePayload::Item {
                        item: self.item(&queued),
                    }),
                    None => RemoteResponse::error(
                        ErrorType::ItemNotFound,
                        "Requested item could not be found",
                    ),
                }
            }
            "GetNextItem" => {
                let Some(request) = parse_payload::<ItemRequest>(payload, false) else {
                    return RemoteResponse::unrecognized();
                };
                let next = self.next_item(&request.current_item_reference).await;
                respond(ResponsePayload::Queue(self.queue_step(next)))
            }
            "GetPreviousItem" => {
                let Some(request) = parse_payload::<ItemRequest>(payload, false) else {
                    return RemoteResponse::unrecognized();
                };
                let previous = self.previous_item(&request.current_item_reference).await;
                respond(ResponsePayload::Queue(self.queue_step(previous)))
            }
            other => {
                warn!(name = other, "Unrecognized remote request");
                RemoteResponse::unrecognized()
            }
        }
    }

    /// Pick the content a selection names, if it can be played
    ///
    /// The most specific attribute wins: track, then playlist, then artist.
    /// No entity attribute selects the whole library.
    pub async fn select(&self, criteria: Option<SelectionCriteria>) -> Option<ContentReference> {
        let attributes = criteria.map(|c| c.attributes).unwrap_or_default();
        let entity = |kind: &str| {
            attributes
                .iter()
                .find(|attribute| attribute.kind == kind)
                .and_then(|attribute| attribute.entity_id.as_deref())
                .filter(|id| !id.is_empty())
        };

        let reference = if let Some(id) = entity("TRACK") {
            ContentReference::track(&TrackId::from(id))
        } else if let Some(id) = entity("PLAYLIST") {
            ContentReference::playlist(&PlaylistId::from(id))
        } else if let Some(id) = entity("ARTIST") {
            ContentReference::artist(&ArtistId::from(id))
        } else {
            ContentReference::all()
        };

        if self.start(&reference).await.is_some() {
            Some(reference)
        } else {
            debug!(reference = %reference, "Selection has nothing playable");
            None
        }
    }

    /// Start playback of an encoded content reference
    pub async fn initiate(&self, content_id: Option<&str>) -> Option<Initiation> {
        let raw = content_id.filter(|raw| !raw.trim().is_empty())?;
        let reference = match ContentReference::decode(raw) {
            Ok(reference) => reference,
            Err(e) => {
                warn!(content_id = raw, error = %e, "Invalid content reference");
                return None;
            }
        };

        let first = self.start(&reference).await?;
        Some(Initiation {
            queue_id: reference.encode(),
            first,
        })
    }

    /// The item the client is on, with refreshed flags
    ///
    /// Only a vanished track is terminal. A queue id that no longer
    /// resolves, or a track that left its context, just clears the flags.
    pub async fn current_item(&self, reference: &ItemReference) -> Option<QueueItem> {
        let track_id = TrackId::new(reference.id.as_str());
        let track = self.engine.resolver().track(&track_id).await.found()?;

        let neighbor = match self.reference(reference) {
            Some(content) => self.engine.locate(&content.context(), &track_id).await,
            None => None,
        };

        Some(QueueItem {
            track,
            has_next: neighbor.as_ref().is_some_and(|n| n.has_next),
            has_previous: neighbor.as_ref().is_some_and(|n| n.has_previous),
        })
    }

    /// The item after the client's current one; `None` ends the queue
    pub async fn next_item(&self, reference: &ItemReference) -> Option<QueueItem> {
        let content = self.reference(reference)?;
        let current = TrackId::new(reference.id.as_str());
        let neighbor = self.engine.next(&content.context(), &current).await?;
        self.queue_item(neighbor).await
    }

    /// The item before the client's current one; `None` ends the queue
    pub async fn previous_item(&self, reference: &ItemReference) -> Option<QueueItem> {
        let content = self.reference(reference)?;
        let current = TrackId::new(reference.id.as_str());
        let neighbor = self.engine.previous(&content.context(), &current).await?;
        self.queue_item(neighbor).await
    }

    async fn start(&self, reference: &ContentReference) -> Option<QueueItem> {
        let anchor = reference.anchor();
        let neighbor = self
            .engine
            .first(&reference.context(), anchor.as_ref())
            .await?;
        self.queue_item(neighbor).await
    }

    async fn queue_item(&self, neighbor: Neighbor) -> Option<QueueItem> {
        let track = self.engine.resolver().track(&neighbor.track_id).await.found()?;
        Some(QueueItem {
            track,
            has_next: neighbor.has_next,
            has_previous: neighbor.has_previous,
        })
    }

    fn reference(&self, item: &ItemReference) -> Option<ContentReference> {
        let raw = item.queue_reference()?;
        ContentReference::decode(raw)
            .map_err(|e| warn!(queue_id = raw, error = %e, "Invalid queue reference"))
            .ok()
    }

    fn queue_step(&self, queued: Option<QueueItem>) -> QueueStep {
        match queued {
            Some(queued) => QueueStep {
                is_queue_finished: false,
                item: Some(self.item(&queued)),
            },
            None => QueueStep {
                is_queue_finished: true,
                item: None,
            },
        }
    }

    /// Wire item for a queued track
    pub fn item(&self, queued: &QueueItem) -> Item {
        let track = &queued.track;
        let valid_until = Utc::now() + Duration::seconds(self.stream_ttl_seconds);

        Item {
            id: track.id.to_string(),
            playback_info: PlaybackInfo {
                kind: "DEFAULT".to_string(),
            },
            metadata: ItemMetadata {
                kind: "TRACK".to_string(),
                name: LocalizedText::plain(&track.title),
                authors: vec![Entity {
                    name: LocalizedText::plain(track.artist_or_unknown()),
                }],
                album: track.album.as_deref().map(|album| Entity {
                    name: LocalizedText::plain(album),
                }),
                art: Art {
                    sources: vec![ArtSource {
                        url: self.media.art_url(&track.id),
                        size: "MEDIUM".to_string(),
                    }],
                },
            },
            duration_in_milliseconds: track.duration_ms,
            controls: vec![
                Control::command("NEXT", queued.has_next),
                Control::command("PREVIOUS", queued.has_previous),
            ],
            rules: Rules {
                feedback_enabled: false,
            },
            stream: Stream {
                id: track.id.to_string(),
                uri: self.media.stream_url(&track.id),
                offset_in_milliseconds: 0,
                valid_until: valid_until.to_rfc3339_opts(SecondsFormat::Secs, true),
            },
        }
    }
}

fn content_for(reference: &ContentReference) -> Content {
    let kind = match reference.kind() {
        ContentKind::All => "ALL",
        ContentKind::Artist => "ARTIST",
        ContentKind::Playlist => "PLAYLIST",
        ContentKind::Track => "TRACK",
    };

    Content {
        id: reference.encode(),
        actions: ContentActions {
            playable: true,
            browsable: false,
        },
        metadata: ContentMetadata {
            kind: kind.to_string(),
        },
    }
}

/// Decode a payload; `allow_empty` treats a missing payload as `{}`
fn parse_payload<T: DeserializeOwned>(payload: serde_json::Value, allow_empty: bool) -> Option<T> {
    let payload = if payload.is_null() && allow_empty {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        payload
    };

    serde_json::from_value(payload)
        .map_err(|e| warn!(error = %e, "Malformed remote payload"))
        .ok()
}
