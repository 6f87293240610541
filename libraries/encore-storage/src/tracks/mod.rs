use encore_core::{error::Result, types::*};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const TRACK_COLUMNS: &str = r#"
    t.id, t.title, t.artist_id, t.album, t.duration_ms, t.added_at,
    ar.name as artist_name
"#;

fn from_row(row: &SqliteRow) -> Track {
    Track {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist_name"),
        artist_id: row.get("artist_id"),
        album: row.get("album"),
        duration_ms: row.get("duration_ms"),
        added_at: row.get("added_at"),
    }
}

/// All track ids, newest added first (ties broken by id)
pub async fn list_ids(pool: &SqlitePool) -> Result<Vec<TrackId>> {
    let ids = sqlx::query_scalar::<_, TrackId>(
        "SELECT id FROM tracks ORDER BY added_at DESC, id",
    )
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

/// Track ids for one artist, newest added first
pub async fn list_ids_by_artist(pool: &SqlitePool, artist_id: &ArtistId) -> Result<Vec<TrackId>> {
    let ids = sqlx::query_scalar::<_, TrackId>(
        "SELECT id FROM tracks WHERE artist_id = ? ORDER BY added_at DESC, id",
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

/// Get track by ID with denormalized artist name
pub async fn get_by_id(pool: &SqlitePool, id: &TrackId) -> Result<Option<Track>> {
    let sql = format!(
        "SELECT {TRACK_COLUMNS}
         FROM tracks t
         LEFT JOIN artists ar ON t.artist_id = ar.id
         WHERE t.id = ?"
    );

    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    Ok(row.as_ref().map(from_row))
}

/// Search tracks by title substring (case-insensitive), newest first
pub async fn search_by_title(pool: &SqlitePool, query: &str) -> Result<Vec<Track>> {
    let search_pattern = crate::contains_pattern(query);
    let sql = format!(
        r"SELECT {TRACK_COLUMNS}
         FROM tracks t
         LEFT JOIN artists ar ON t.artist_id = ar.id
         WHERE t.title LIKE ? ESCAPE '\'
         ORDER BY t.added_at DESC, t.id"
    );

    let rows = sqlx::query(&sql)
        .bind(search_pattern)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Search tracks by artist name or artist keywords, newest first
pub async fn search_by_artist(pool: &SqlitePool, query: &str) -> Result<Vec<Track>> {
    let search_pattern = crate::contains_pattern(query);
    let sql = format!(
        r"SELECT {TRACK_COLUMNS}
         FROM tracks t
         INNER JOIN artists ar ON t.artist_id = ar.id
         WHERE ar.name LIKE ? ESCAPE '\'
            OR ar.keywords LIKE ? ESCAPE '\'
         ORDER BY t.added_at DESC, t.id"
    );

    let rows = sqlx::query(&sql)
        .bind(&search_pattern)
        .bind(&search_pattern)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Insert a track snapshot
pub async fn insert(pool: &SqlitePool, track: &Track) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO tracks (id, title, artist_id, album, duration_ms, added_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&track.id)
    .bind(&track.title)
    .bind(&track.artist_id)
    .bind(&track.album)
    .bind(track.duration_ms)
    .bind(track.added_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a track (playlist entries cascade)
pub async fn delete(pool: &SqlitePool, id: &TrackId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
