//! Directive protocol wire format

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Deserialize)]
pub struct DirectiveRequest {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub context: Option<RequestContext>,
    pub request: RequestBody,
}

impl DirectiveRequest {
    /// Token the audio player reports in the session context
    pub fn player_token(&self) -> Option<&str> {
        self.audio_player()?.token.as_deref()
    }

    /// Offset the audio player reports in the session context
    pub fn player_offset(&self) -> i64 {
        self.audio_player()
            .and_then(|player| player.offset_in_milliseconds)
            .unwrap_or(0)
            .max(0)
    }

    fn audio_player(&self) -> Option<&AudioPlayerState> {
        self.context.as_ref()?.audio_player.as_ref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    #[serde(rename = "AudioPlayer", default)]
    pub audio_player: Option<AudioPlayerState>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerState {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub offset_in_milliseconds: Option<i64>,
    #[serde(default)]
    pub player_activity: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub intent: Option<Intent>,
    /// Token carried by audio player events
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub offset_in_milliseconds: Option<i64>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Trimmed slot value; `None` when missing or blank
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)?
            .value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectiveResponse {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "AudioPlayer.Play", rename_all = "camelCase")]
    Play {
        play_behavior: PlayBehavior,
        audio_item: AudioItem,
    },
    #[serde(rename = "AudioPlayer.Stop")]
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayBehavior {
    ReplaceAll,
    Enqueue,
}

#[derive(Debug, Clone, Serialize)]
pub struct AudioItem {
    pub stream: AudioStream,
    pub metadata: AudioMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioStream {
    pub url: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_previous_token: Option<String>,
    pub offset_in_milliseconds: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AudioMetadata {
    pub title: String,
    pub subtitle: String,
    pub art: ArtImage,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtImage {
    pub sources: Vec<ImageSource>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageSource {
    pub url: String,
}

impl DirectiveResponse {
    fn with_body(response: ResponseBody) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            response,
        }
    }

    /// Empty acknowledgement
    pub fn empty() -> Self {
        Self::with_body(ResponseBody::default())
    }

    /// Speech only
    pub fn speak(text: impl Into<String>, end_session: bool) -> Self {
        Self::with_body(ResponseBody {
            output_speech: Some(OutputSpeech::plain(text)),
            directives: Vec::new(),
            should_end_session: Some(end_session),
        })
    }

    /// A single directive, optionally announced
    ///
    /// `end_session` is `None` for player events, which carry no session.
    pub fn directive(directive: Directive, speech: Option<String>, end_session: Option<bool>) -> Self {
        Self::with_body(ResponseBody {
            output_speech: speech.map(OutputSpeech::plain),
            directives: vec![directive],
            should_end_session: end_session,
        })
    }

    /// Spoken text, if any
    pub fn speech(&self) -> Option<&str> {
        self.response
            .output_speech
            .as_ref()
            .map(|speech| speech.text.as_str())
    }

    /// The first Play directive's behavior and stream
    pub fn play(&self) -> Option<(PlayBehavior, &AudioStream)> {
        self.response.directives.iter().find_map(|directive| match directive {
            Directive::Play {
                play_behavior,
                audio_item,
            } => Some((*play_behavior, &audio_item.stream)),
            Directive::Stop => None,
        })
    }

    /// Whether this is a bare acknowledgement
    pub fn is_empty(&self) -> bool {
        self.response.output_speech.is_none()
            && self.response.directives.is_empty()
            && self.response.should_end_session.is_none()
    }
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: "PlainText".to_string(),
            text: text.into(),
        }
    }
}
