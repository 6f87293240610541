//! Opaque client-held state
//!
//! Two independent encodings of "where the listener is":
//! - [`ContentReference`]: what the remote-resolution protocol selected
//! - [`NavigationToken`]: track + context carried by the directive protocol
//!
//! Decoding never panics; malformed input is a [`crate::TokenError`].

mod content_reference;
mod navigation_token;

pub use content_reference::{
    ContentKind, ContentReference, CURRENT_SEPARATOR, LEGACY_ALL_SENTINEL, LEGACY_PREFIX,
};
pub use navigation_token::{context_from_str, context_to_string, NavigationToken};
