//! Encore Server Library
//!
//! HTTP front end for the voice music skill: the remote-resolution and
//! directive protocol adapters, configuration, and the axum router.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{DirectiveAdapter, RemoteAdapter};
pub use state::AppState;
