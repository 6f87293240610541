//! Token decoding errors

use thiserror::Error;

/// Why an opaque client token could not be decoded
///
/// Callers treat every variant exactly like a missing entity; the detail is
/// only for logs.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Empty or whitespace-only input
    #[error("Token is empty")]
    Empty,

    /// Not valid URL-safe base64
    #[error("Token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not the expected JSON envelope
    #[error("Token envelope is malformed: {0}")]
    Envelope(#[from] serde_json::Error),

    /// Content kind segment not recognised
    #[error("Unknown content kind: {0}")]
    UnknownKind(String),

    /// Kind requires an entity id but none was present
    #[error("Missing entity id for {0}")]
    MissingEntity(String),

    /// Context string not recognised
    #[error("Unknown playback context: {0}")]
    UnknownContext(String),
}

/// Result type for token decoding
pub type Result<T> = std::result::Result<T, TokenError>;
