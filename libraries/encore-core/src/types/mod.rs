mod context;
mod ids;
mod playlist;
mod resolution;
mod track;

pub use context::PlaybackContext;
pub use ids::{ArtistId, PlaylistId, TrackId};
pub use playlist::Playlist;
pub use resolution::Resolution;
pub use track::Track;
