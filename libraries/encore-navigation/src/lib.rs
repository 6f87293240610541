//! Encore - Navigation
//!
//! Stateless navigation over a music catalog.
//!
//! This crate provides:
//! - Context resolution (context → ordered track-id sequence)
//! - Adjacency (next/previous with lookahead flags)
//! - Token codecs for both client protocols
//!   - `ContentReference` (current `kind::id` and legacy `prefix-kind-id` forms)
//!   - `NavigationToken` (URL-safe base64 JSON envelope)
//!
//! # Architecture
//!
//! Nothing here keeps state between calls. Every operation re-reads the
//! catalog, so the continuation state lives entirely in the tokens the
//! client sends back.
//!
//! # Example: Adjacency over a resolved sequence
//!
//! ```rust
//! use encore_core::TrackId;
//! use encore_navigation::{adjacency, Sequence};
//!
//! let sequence = Sequence::new(vec![TrackId::new("a"), TrackId::new("b"), TrackId::new("c")]);
//!
//! let next = adjacency::next_in(&sequence, &TrackId::new("a")).unwrap();
//! assert_eq!(next.track_id, TrackId::new("b"));
//! assert!(next.has_next);
//!
//! assert!(adjacency::next_in(&sequence, &TrackId::new("c")).is_none());
//! ```
//!
//! # Example: Tokens
//!
//! ```rust
//! use encore_core::{PlaybackContext, TrackId};
//! use encore_navigation::NavigationToken;
//!
//! let token = NavigationToken::new(TrackId::new("t-1"), PlaybackContext::All);
//! let encoded = token.encode();
//!
//! assert_eq!(NavigationToken::decode(&encoded).unwrap(), token);
//! assert!(NavigationToken::decode("%%not a token%%").is_err());
//! ```

pub mod adjacency;
pub mod error;
pub mod resolver;
pub mod token;

pub use adjacency::{AdjacencyEngine, Neighbor};
pub use error::TokenError;
pub use resolver::{ContextResolver, Sequence};
pub use token::{ContentKind, ContentReference, NavigationToken};
