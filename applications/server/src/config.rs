/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_media")]
    pub media: MediaSettings,

    #[serde(default = "default_skill")]
    pub skill: SkillSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaSettings {
    /// Root of the asset host serving `/stream/{id}` and `/art/{id}`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How long a stream URL handed to the remote-resolution client stays valid
    #[serde(default = "default_stream_ttl_seconds")]
    pub stream_ttl_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkillSettings {
    /// Name spoken in greetings and help
    #[serde(default = "default_skill_name")]
    pub name: String,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// `path` defaults to `config.toml` in the working directory; a missing
    /// default file is fine. Environment variables prefixed with `ENCORE_`
    /// override file values, with `__` between nested keys
    /// (e.g. `ENCORE_MEDIA__BASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ENCORE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.trim().is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set ENCORE_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        if self.media.base_url.trim().is_empty() {
            return Err(ServerError::Config(
                "Media base URL is required (set ENCORE_MEDIA__BASE_URL)".to_string(),
            ));
        }

        if self.media.stream_ttl_seconds == 0 {
            return Err(ServerError::Config(
                "Stream TTL must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/encore.db".to_string()
}

fn default_media() -> MediaSettings {
    MediaSettings {
        base_url: default_base_url(),
        stream_ttl_seconds: default_stream_ttl_seconds(),
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/media".to_string()
}

fn default_stream_ttl_seconds() -> u64 {
    3600
}

fn default_skill() -> SkillSettings {
    SkillSettings {
        name: default_skill_name(),
    }
}

fn default_skill_name() -> String {
    "Encore".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            media: default_media(),
            skill: default_skill(),
        }
    }
}
