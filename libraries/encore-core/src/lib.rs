//! Encore Core
//!
//! Shared domain types, the storage collaborator contract, and error handling
//! for the Encore voice music skill.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `PlaybackContext` and their ids
//! - **Catalog**: the read-only storage contract navigation is computed against
//! - **Resolution**: explicit found / not-found / invalid outcome type
//! - **Media URLs**: pure stream/artwork URL formatting
//!
//! # Example
//!
//! ```rust
//! use encore_core::{MediaUrls, PlaybackContext, TrackId};
//!
//! let urls = MediaUrls::new("https://cdn.example.com/media/");
//! let track = TrackId::new("t-1");
//!
//! assert_eq!(urls.stream_url(&track), "https://cdn.example.com/media/stream/t-1");
//! assert!(PlaybackContext::Single.is_single());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod media;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{EncoreError, Result};
pub use media::MediaUrls;

pub use types::{
    ArtistId, PlaybackContext, Playlist, PlaylistId, Resolution, Track, TrackId,
};
