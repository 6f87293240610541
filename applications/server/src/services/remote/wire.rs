//! Remote-resolution wire format
//!
//! Requests arrive as `{ header, payload }`; the payload shape depends on
//! `header.name`. Responses mirror the envelope with `<name>.Response` or
//! `ErrorResponse`.

use serde::{Deserialize, Serialize};

pub const PAYLOAD_VERSION: &str = "1.0";
pub const ERROR_NAMESPACE: &str = "Alexa";
pub const ERROR_NAME: &str = "ErrorResponse";

/// Incoming envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRequest {
    pub header: RequestHeader,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub message_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPlayableContentRequest {
    #[serde(default)]
    pub selection_criteria: Option<SelectionCriteria>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionCriteria {
    #[serde(default)]
    pub attributes: Vec<SelectionAttribute>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionAttribute {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub entity_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateRequest {
    #[serde(default)]
    pub content_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub current_item_reference: ItemReference,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemReference {
    /// Track id of the item currently playing
    pub id: String,
    #[serde(default)]
    pub queue_id: Option<String>,
    #[serde(default)]
    pub content_id: Option<String>,
}

impl ItemReference {
    /// The content reference this item was queued under
    pub fn queue_reference(&self) -> Option<&str> {
        self.queue_id.as_deref().or(self.content_id.as_deref())
    }
}

/// Outgoing envelope
#[derive(Debug, Clone, Serialize)]
pub struct RemoteResponse {
    pub header: ResponseHeader,
    pub payload: ResponsePayload,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    pub namespace: String,
    pub name: String,
    pub message_id: String,
    pub payload_version: String,
}

impl ResponseHeader {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            message_id: uuid::Uuid::new_v4().to_string(),
            payload_version: PAYLOAD_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    Content { content: Content },
    Initiate {
        #[serde(rename = "playbackMethod")]
        playback_method: PlaybackMethod,
    },
    Item { item: Item },
    Queue(QueueStep),
    Error(ErrorPayload),
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub id: String,
    pub actions: ContentActions,
    pub metadata: ContentMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentActions {
    pub playable: bool,
    pub browsable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentMetadata {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackMethod {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub rules: Rules,
    pub first_item: Item,
}

/// Next/previous answer: either the adjacent item or end of queue
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStep {
    pub is_queue_finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub playback_info: PlaybackInfo,
    pub metadata: ItemMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_milliseconds: Option<i64>,
    pub controls: Vec<Control>,
    pub rules: Rules,
    pub stream: Stream,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaybackInfo {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMetadata {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: LocalizedText,
    pub authors: Vec<Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<Entity>,
    pub art: Art,
}

#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    pub name: LocalizedText,
}

/// Text in both spoken and displayed form
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedText {
    pub speech: Speech,
    pub display: String,
}

impl LocalizedText {
    pub fn plain(text: &str) -> Self {
        Self {
            speech: Speech {
                kind: "PLAIN_TEXT".to_string(),
                text: text.to_string(),
            },
            display: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Speech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Art {
    pub sources: Vec<ArtSource>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtSource {
    pub url: String,
    pub size: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Control {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub enabled: bool,
}

impl Control {
    pub fn command(name: &str, enabled: bool) -> Self {
        Self {
            kind: "COMMAND".to_string(),
            name: name.to_string(),
            enabled,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    pub feedback_enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub id: String,
    pub uri: String,
    pub offset_in_milliseconds: i64,
    pub valid_until: String,
}

/// Error types understood by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    ContentNotFound,
    ItemNotFound,
    InvalidRequest,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub message: String,
}

impl RemoteResponse {
    /// `ErrorResponse` envelope
    pub fn error(kind: ErrorType, message: impl Into<String>) -> Self {
        Self {
            header: ResponseHeader::new(ERROR_NAMESPACE, ERROR_NAME),
            payload: ResponsePayload::Error(ErrorPayload {
                kind,
                message: message.into(),
            }),
        }
    }

    /// Response to a request nobody understood
    pub fn unrecognized() -> Self {
        Self::error(ErrorType::InvalidRequest, "Unrecognized request")
    }
}
