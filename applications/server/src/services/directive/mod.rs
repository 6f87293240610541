//! Directive protocol adapter
//!
//! One request per intent or player event, answered with speech and/or a
//! Play/Stop directive. Navigation state rides along in the
//! [`NavigationToken`] the player echoes back.

mod speech;
pub mod wire;

use encore_core::{MediaUrls, PlaybackContext, Resolution, Track};
use encore_navigation::{AdjacencyEngine, NavigationToken};
use tracing::{debug, info, warn};

use wire::{
    ArtImage, AudioItem, AudioMetadata, AudioStream, Directive, DirectiveRequest,
    DirectiveResponse, ImageSource, Intent, PlayBehavior,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

/// Where a request came from
///
/// Physical controls and player events have no speech channel and no
/// session to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Voice,
    Silent,
}

impl Channel {
    fn end_session(self) -> Option<bool> {
        match self {
            Channel::Voice => Some(true),
            Channel::Silent => None,
        }
    }
}

pub struct DirectiveAdapter {
    engine: AdjacencyEngine,
    media: MediaUrls,
    skill_name: String,
}

impl DirectiveAdapter {
    pub fn new(engine: AdjacencyEngine, media: MediaUrls, skill_name: impl Into<String>) -> Self {
        Self {
            engine,
            media,
            skill_name: skill_name.into(),
        }
    }

    /// Answer for a request that could not be decoded or handled
    ///
    /// `kind` is the raw `request.type`. Intents get the spoken fallback with
    /// the session left open, everything else an empty acknowledgement.
    pub fn fallback(kind: Option<&str>) -> DirectiveResponse {
        match kind {
            Some("IntentRequest") => DirectiveResponse::speak(speech::FALLBACK, false),
            _ => DirectiveResponse::empty(),
        }
    }

    /// Answer one intent or player event
    pub async fn handle(&self, request: DirectiveRequest) -> DirectiveResponse {
        let body = &request.request;
        debug!(
            kind = %body.kind,
            request_id = ?body.request_id,
            "Directive request"
        );

        match body.kind.as_str() {
            "LaunchRequest" => DirectiveResponse::speak(speech::greeting(&self.skill_name), false),
            "SessionEndedRequest" => DirectiveResponse::empty(),
            "IntentRequest" => match body.intent.as_ref() {
                Some(intent) => self.handle_intent(intent, &request).await,
                None => Self::fallback(Some("IntentRequest")),
            },
            "AudioPlayer.PlaybackStarted"
            | "AudioPlayer.PlaybackFinished"
            | "AudioPlayer.PlaybackStopped" => DirectiveResponse::empty(),
            "AudioPlayer.PlaybackNearlyFinished" => {
                self.enqueue_next(body.token.as_deref()).await
            }
            "AudioPlayer.PlaybackFailed" => {
                warn!(token = ?body.token, error = ?body.error, "Playback failed");
                DirectiveResponse::empty()
            }
            "PlaybackController.NextCommandIssued" => {
                self.skip(Direction::Next, request.player_token(), Channel::Silent)
                    .await
            }
            "PlaybackController.PreviousCommandIssued" => {
                self.skip(Direction::Previous, request.player_token(), Channel::Silent)
                    .await
            }
            "PlaybackController.PlayCommandIssued" => {
                self.resume(
                    request.player_token(),
                    request.player_offset(),
                    Channel::Silent,
                )
                .await
            }
            "PlaybackController.PauseCommandIssued" => stop(Channel::Silent),
            "System.ExceptionEncountered" => {
                warn!(error = ?body.error, "Player reported an exception");
                DirectiveResponse::empty()
            }
            other => {
                debug!(kind = other, "Ignoring unrecognized event");
                DirectiveResponse::empty()
            }
        }
    }

    async fn handle_intent(&self, intent: &Intent, request: &DirectiveRequest) -> DirectiveResponse {
        match intent.name.as_str() {
            "PlaySongIntent" => self.play_song(intent.slot("song")).await,
            "PlayArtistIntent" => self.play_artist(intent.slot("artist")).await,
            "PlayPlaylistIntent" => self.play_playlist(intent.slot("playlist")).await,
            "PlayAllIntent" => self.play_everything(None, Channel::Voice).await,
            "AMAZON.ResumeIntent" => {
                self.resume(
                    request.player_token(),
                    request.player_offset(),
                    Channel::Voice,
                )
                .await
            }
            "AMAZON.NextIntent" => {
                self.skip(Direction::Next, request.player_token(), Channel::Voice)
                    .await
            }
            "AMAZON.PreviousIntent" => {
                self.skip(Direction::Previous, request.player_token(), Channel::Voice)
                    .await
            }
            "AMAZON.PauseIntent" | "AMAZON.StopIntent" | "AMAZON.CancelIntent" => {
                stop(Channel::Voice)
            }
            "AMAZON.HelpIntent" => DirectiveResponse::speak(speech::help(&self.skill_name), false),
            other => {
                debug!(intent = other, "Unrecognized intent");
                DirectiveResponse::speak(speech::FALLBACK, false)
            }
        }
    }

    /// Play a track by title, continuing through the whole library
    ///
    /// An unmatched title is reported rather than replaced.
    pub async fn play_song(&self, title: Option<&str>) -> DirectiveResponse {
        let Some(title) = title else {
            return self.play_everything(None, Channel::Voice).await;
        };

        let Some(track) = self.engine.resolver().first_title_match(title).await else {
            info!(title, "No song matched");
            return DirectiveResponse::speak(speech::song_not_found(title), true);
        };

        let token = NavigationToken::new(track.id.clone(), PlaybackContext::All);
        let announcement = speech::playing_song(&track);
        self.play_now(&track, token.encode(), 0, Some(announcement), Channel::Voice)
    }

    /// Play an artist's tracks from the newest
    pub async fn play_artist(&self, name: Option<&str>) -> DirectiveResponse {
        let Some(name) = name else {
            return self.play_everything(None, Channel::Voice).await;
        };

        let Some(matched) = self.engine.resolver().first_artist_match(name).await else {
            info!(artist = name, "No artist matched");
            return self
                .play_everything(Some(speech::artist_not_found(name)), Channel::Voice)
                .await;
        };

        let context = matched
            .artist_id
            .clone()
            .map_or(PlaybackContext::All, PlaybackContext::Artist);
        let start = self.first_track(&context).await.unwrap_or(matched);

        let token = NavigationToken::new(start.id.clone(), context);
        let announcement = speech::playing_artist(start.artist_or_unknown());
        self.play_now(&start, token.encode(), 0, Some(announcement), Channel::Voice)
    }

    /// Play a playlist from its first entry
    pub async fn play_playlist(&self, name: Option<&str>) -> DirectiveResponse {
        let Some(name) = name else {
            return self.play_everything(None, Channel::Voice).await;
        };

        let Some(playlist) = self.engine.resolver().first_playlist_match(name).await else {
            info!(playlist = name, "No playlist matched");
            return self
                .play_everything(Some(speech::playlist_not_found(name)), Channel::Voice)
                .await;
        };

        let context = PlaybackContext::Playlist(playlist.id.clone());
        match self.first_track(&context).await {
            Some(track) => {
                let token = NavigationToken::new(track.id.clone(), context);
                let announcement = speech::playing_playlist(&playlist.name);
                self.play_now(&track, token.encode(), 0, Some(announcement), Channel::Voice)
            }
            None => {
                self.play_everything(Some(speech::playlist_empty(&playlist.name)), Channel::Voice)
                    .await
            }
        }
    }

    /// Play the whole library from the newest track
    async fn play_everything(&self, notice: Option<String>, channel: Channel) -> DirectiveResponse {
        let Some(track) = self.first_track(&PlaybackContext::All).await else {
            return match channel {
                Channel::Voice => DirectiveResponse::speak(speech::LIBRARY_EMPTY, true),
                Channel::Silent => DirectiveResponse::empty(),
            };
        };

        let token = NavigationToken::new(track.id.clone(), PlaybackContext::All);
        let announcement = match channel {
            Channel::Voice => Some(speech::with_notice(notice, speech::PLAYING_EVERYTHING)),
            Channel::Silent => None,
        };
        self.play_now(&track, token.encode(), 0, announcement, channel)
    }

    /// Pick up where the player left off
    ///
    /// The incoming token is reused as-is when it still resolves; anything
    /// else restarts the library from the top.
    async fn resume(&self, raw: Option<&str>, offset: i64, channel: Channel) -> DirectiveResponse {
        if let (Some(raw), Resolution::Found(token)) = (raw, NavigationToken::resolve(raw)) {
            if let Resolution::Found(track) = self.engine.resolver().track(&token.track_id).await {
                return self.play_now(&track, raw.trim().to_string(), offset, None, channel);
            }
            debug!(track_id = %token.track_id, "Resume target is gone");
        }

        self.play_everything(None, channel).await
    }

    async fn skip(&self, direction: Direction, raw: Option<&str>, channel: Channel) -> DirectiveResponse {
        let step = match NavigationToken::resolve(raw) {
            Resolution::Found(token) => self.step(&token, direction).await,
            Resolution::NotFound | Resolution::Invalid => None,
        };

        match (step, channel) {
            (Some((track, token)), _) => self.play_now(&track, token.encode(), 0, None, channel),
            (None, Channel::Voice) => {
                let text = match direction {
                    Direction::Next => speech::NO_NEXT,
                    Direction::Previous => speech::NO_PREVIOUS,
                };
                DirectiveResponse::speak(text, true)
            }
            (None, Channel::Silent) => DirectiveResponse::empty(),
        }
    }

    /// Queue the following track behind the one about to finish
    async fn enqueue_next(&self, raw: Option<&str>) -> DirectiveResponse {
        let (Some(raw), Resolution::Found(token)) = (raw, NavigationToken::resolve(raw)) else {
            return DirectiveResponse::empty();
        };

        match self.step(&token, Direction::Next).await {
            Some((track, next)) => {
                let directive = self.play_directive(
                    &track,
                    next.encode(),
                    PlayBehavior::Enqueue,
                    0,
                    Some(raw.to_string()),
                );
                DirectiveResponse::directive(directive, None, None)
            }
            None => {
                debug!(track_id = %token.track_id, "End of queue");
                DirectiveResponse::empty()
            }
        }
    }

    async fn step(
        &self,
        token: &NavigationToken,
        direction: Direction,
    ) -> Option<(Track, NavigationToken)> {
        let neighbor = match direction {
            Direction::Next => self.engine.next(&token.context, &token.track_id).await?,
            Direction::Previous => self.engine.previous(&token.context, &token.track_id).await?,
        };
        let track = self.engine.resolver().track(&neighbor.track_id).await.found()?;
        Some((track, token.with_track(neighbor.track_id)))
    }

    async fn first_track(&self, context: &PlaybackContext) -> Option<Track> {
        let neighbor = self.engine.first(context, None).await?;
        self.engine.resolver().track(&neighbor.track_id).await.found()
    }

    fn play_now(
        &self,
        track: &Track,
        token: String,
        offset: i64,
        announcement: Option<String>,
        channel: Channel,
    ) -> DirectiveResponse {
        let directive = self.play_directive(track, token, PlayBehavior::ReplaceAll, offset, None);
        DirectiveResponse::directive(directive, announcement, channel.end_session())
    }

    fn play_directive(
        &self,
        track: &Track,
        token: String,
        play_behavior: PlayBehavior,
        offset: i64,
        expected_previous_token: Option<String>,
    ) -> Directive {
        Directive::Play {
            play_behavior,
            audio_item: AudioItem {
                stream: AudioStream {
                    url: self.media.stream_url(&track.id),
                    token,
                    expected_previous_token,
                    offset_in_milliseconds: offset,
                },
                metadata: AudioMetadata {
                    title: track.title.clone(),
                    subtitle: track.artist_or_unknown().to_string(),
                    art: ArtImage {
                        sources: vec![ImageSource {
                            url: self.media.art_url(&track.id),
                        }],
                    },
                },
            },
        }
    }
}

fn stop(channel: Channel) -> DirectiveResponse {
    DirectiveResponse::directive(Directive::Stop, None, channel.end_session())
}
