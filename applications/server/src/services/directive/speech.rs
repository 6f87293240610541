//! Spoken responses

use encore_core::Track;

pub fn greeting(skill: &str) -> String {
    format!("Welcome to {skill}. What would you like to hear?")
}

pub fn help(skill: &str) -> String {
    format!(
        "{skill} plays music from your library. Try saying play a song by name, \
         play an artist, or play everything."
    )
}

pub const FALLBACK: &str = "Sorry, I didn't catch that. What would you like to hear?";
pub const LIBRARY_EMPTY: &str = "Your library is empty.";
pub const NO_NEXT: &str = "There is no next track.";
pub const NO_PREVIOUS: &str = "There is no previous track.";
pub const PLAYING_EVERYTHING: &str = "Playing all songs.";

pub fn playing_song(track: &Track) -> String {
    format!("Playing {} by {}.", track.title, track.artist_or_unknown())
}

pub fn playing_artist(name: &str) -> String {
    format!("Playing songs by {name}.")
}

pub fn playing_playlist(name: &str) -> String {
    format!("Playing playlist {name}.")
}

pub fn song_not_found(title: &str) -> String {
    format!("{title} not found.")
}

pub fn artist_not_found(name: &str) -> String {
    format!("I couldn't find {name}.")
}

pub fn playlist_not_found(name: &str) -> String {
    format!("I couldn't find a playlist called {name}.")
}

pub fn playlist_empty(name: &str) -> String {
    format!("Playlist {name} is empty.")
}

/// Prefix a notice onto the everything confirmation
pub fn with_notice(notice: Option<String>, text: &str) -> String {
    match notice {
        Some(notice) => format!("{notice} {text}"),
        None => text.to_string(),
    }
}
