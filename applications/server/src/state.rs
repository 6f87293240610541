/// Shared application state
use crate::config::ServerConfig;
use crate::services::{DirectiveAdapter, RemoteAdapter};
use encore_core::{Catalog, MediaUrls};
use encore_navigation::{AdjacencyEngine, ContextResolver};
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Holds no navigation state: both adapters answer every request from
/// storage and the tokens the client sends back.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub remote: Arc<RemoteAdapter>,
    pub directive: Arc<DirectiveAdapter>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        remote: Arc<RemoteAdapter>,
        directive: Arc<DirectiveAdapter>,
    ) -> Self {
        Self {
            catalog,
            remote,
            directive,
        }
    }

    /// Wire both adapters to one catalog
    pub fn from_catalog(catalog: Arc<dyn Catalog>, config: &ServerConfig) -> Self {
        let engine = AdjacencyEngine::new(ContextResolver::new(Arc::clone(&catalog)));
        let media = MediaUrls::new(config.media.base_url.clone());

        let remote = RemoteAdapter::new(
            engine.clone(),
            media.clone(),
            config.media.stream_ttl_seconds,
        );
        let directive = DirectiveAdapter::new(engine, media, config.skill.name.clone());

        Self::new(catalog, Arc::new(remote), Arc::new(directive))
    }
}
