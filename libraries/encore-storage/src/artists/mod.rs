use encore_core::{error::Result, types::*};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// An artist row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    #[serde(default)]
    pub keywords: Option<String>,
}

pub async fn insert(pool: &SqlitePool, artist: &Artist) -> Result<()> {
    sqlx::query("INSERT INTO artists (id, name, keywords) VALUES (?, ?, ?)")
        .bind(&artist.id)
        .bind(&artist.name)
        .bind(&artist.keywords)
        .execute(pool)
        .await?;

    Ok(())
}
