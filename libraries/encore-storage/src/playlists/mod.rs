use encore_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

/// Track ids of a playlist in stored position order
///
/// An unknown playlist yields an empty list.
pub async fn list_track_ids(pool: &SqlitePool, playlist_id: &PlaylistId) -> Result<Vec<TrackId>> {
    let ids = sqlx::query_scalar::<_, TrackId>(
        r#"
        SELECT pt.track_id
        FROM playlist_tracks pt
        INNER JOIN tracks t ON pt.track_id = t.id
        WHERE pt.playlist_id = ?
        ORDER BY pt.position
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

/// Search playlists by name substring, ordered by name
pub async fn search_by_name(pool: &SqlitePool, query: &str) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r"SELECT id, name FROM playlists WHERE name LIKE ? ESCAPE '\' ORDER BY name, id",
    )
    .bind(crate::contains_pattern(query))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Playlist {
            id: row.get("id"),
            name: row.get("name"),
        })
        .collect())
}

/// Create a playlist
pub async fn insert(pool: &SqlitePool, playlist: &Playlist) -> Result<()> {
    sqlx::query("INSERT INTO playlists (id, name) VALUES (?, ?)")
        .bind(&playlist.id)
        .bind(&playlist.name)
        .execute(pool)
        .await?;

    Ok(())
}

/// Append a track at the end of a playlist
///
/// Returns `false` when the track is already in the playlist; it keeps its
/// original position.
pub async fn add_track(pool: &SqlitePool, playlist_id: &PlaylistId, track_id: &TrackId) -> Result<bool> {
    let next_position: i64 = sqlx::query_scalar(
        "SELECT COALESCE(MAX(position) + 1, 0) FROM playlist_tracks WHERE playlist_id = ?",
    )
    .bind(playlist_id)
    .fetch_one(pool)
    .await?;

    let result = sqlx::query(
        "INSERT OR IGNORE INTO playlist_tracks (playlist_id, track_id, position) VALUES (?, ?, ?)",
    )
    .bind(playlist_id)
    .bind(track_id)
    .bind(next_position)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
