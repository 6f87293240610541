//! Integration tests for the SQLite catalog
//!
//! Tests:
//! - Newest-first ordering for library and artist sequences
//! - Stored position order for playlists, each track at most once
//! - Unknown ids resolve to empty sequences
//! - Substring search on title, artist name/keywords, playlist name
//! - `%` and `_` in a search query match literally


use encore_core::{types::*, Catalog};
use encore_storage::SqliteCatalog;
use test_helpers::*;

#[tokio::test]
async fn test_all_tracks_newest_first() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let oldest = create_test_track(pool, "t1", "Oldest", None, 100).await;
    let newest = create_test_track(pool, "t3", "Newest", None, 300).await;
    let middle = create_test_track(pool, "t2", "Middle", None, 200).await;

    let catalog = SqliteCatalog::new(pool.clone());
    let ids = catalog.list_all_track_ids().await.unwrap();

    assert_eq!(ids, vec![newest, middle, oldest]);
}

#[tokio::test]
async fn test_equal_timestamps_break_ties_by_id() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_track(pool, "b", "B", None, 100).await;
    create_test_track(pool, "a", "A", None, 100).await;

    let catalog = SqliteCatalog::new(pool.clone());
    let first = catalog.list_all_track_ids().await.unwrap();
    let second = catalog.list_all_track_ids().await.unwrap();

    assert_eq!(first, vec![TrackId::new("a"), TrackId::new("b")]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_artist_sequence_filters_and_orders() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let simone = create_test_artist(pool, "a1", "Nina Simone", None).await;
    let davis = create_test_artist(pool, "a2", "Miles Davis", None).await;

    let feeling = create_test_track(pool, "t1", "Feeling Good", Some(&simone), 100).await;
    create_test_track(pool, "t2", "So What", Some(&davis), 200).await;
    let sinnerman = create_test_track(pool, "t3", "Sinnerman", Some(&simone), 300).await;

    let catalog = SqliteCatalog::new(pool.clone());
    let ids = catalog.list_track_ids_by_artist(&simone).await.unwrap();

    assert_eq!(ids, vec![sinnerman, feeling]);
}

#[tokio::test]
async fn test_unknown_artist_and_playlist_are_empty() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    create_test_track(pool, "t1", "Song", None, 100).await;

    let catalog = SqliteCatalog::new(pool.clone());

    assert!(catalog
        .list_track_ids_by_artist(&ArtistId::new("nobody"))
        .await
        .unwrap()
        .is_empty());
    assert!(catalog
        .list_track_ids_for_playlist(&PlaylistId::new("nothing"))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_playlist_keeps_stored_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let old = create_test_track(pool, "t1", "Old", None, 100).await;
    let new = create_test_track(pool, "t2", "New", None, 500).await;
    let mid = create_test_track(pool, "t3", "Mid", None, 300).await;

    let playlist = create_test_playlist(pool, "p1", "Road Trip", &[&old, &new, &mid]).await;

    let catalog = SqliteCatalog::new(pool.clone());
    let ids = catalog.list_track_ids_for_playlist(&playlist).await.unwrap();

    assert_eq!(ids, vec![old, new, mid]);
}

#[tokio::test]
async fn test_duplicate_playlist_entry_is_ignored() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = create_test_track(pool, "t1", "First", None, 100).await;
    let second = create_test_track(pool, "t2", "Second", None, 200).await;
    let playlist = create_test_playlist(pool, "p1", "Mix", &[&first, &second]).await;

    let added = encore_storage::playlists::add_track(pool, &playlist, &first)
        .await
        .unwrap();
    assert!(!added);

    let third = create_test_track(pool, "t3", "Third", None, 300).await;
    assert!(encore_storage::playlists::add_track(pool, &playlist, &third)
        .await
        .unwrap());

    let catalog = SqliteCatalog::new(pool.clone());
    assert_eq!(
        catalog.list_track_ids_for_playlist(&playlist).await.unwrap(),
        vec![first, second, third]
    );
}

#[tokio::test]
async fn test_deleted_track_leaves_playlist_sequence() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = create_test_track(pool, "t1", "First", None, 100).await;
    let second = create_test_track(pool, "t2", "Second", None, 200).await;
    let playlist = create_test_playlist(pool, "p1", "Mix", &[&first, &second]).await;

    assert!(encore_storage::tracks::delete(pool, &first).await.unwrap());

    let catalog = SqliteCatalog::new(pool.clone());
    assert_eq!(
        catalog.list_track_ids_for_playlist(&playlist).await.unwrap(),
        vec![second]
    );
    assert!(catalog.get_track(&first).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_track_denormalizes_artist_name() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = create_test_artist(pool, "a1", "Nina Simone", None).await;
    let id = create_test_track(pool, "t1", "Sinnerman", Some(&artist), 100).await;

    let catalog = SqliteCatalog::new(pool.clone());
    let track = catalog.get_track(&id).await.unwrap().unwrap();

    assert_eq!(track.title, "Sinnerman");
    assert_eq!(track.artist.as_deref(), Some("Nina Simone"));
    assert_eq!(track.artist_id, Some(artist));
    assert_eq!(track.duration_ms, Some(200_000));
}

#[tokio::test]
async fn test_search_by_title_is_case_insensitive_substring() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_track(pool, "t1", "Feeling Good", None, 100).await;
    create_test_track(pool, "t2", "Good Times", None, 200).await;
    create_test_track(pool, "t3", "Blue", None, 300).await;

    let catalog = SqliteCatalog::new(pool.clone());
    let hits = catalog.search_tracks_by_title("good").await.unwrap();

    let titles: Vec<_> = hits.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Good Times", "Feeling Good"]);
    assert!(catalog.search_tracks_by_title("nope").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_by_artist_matches_name_or_keyword() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let boss = create_test_artist(pool, "a1", "Bruce Springsteen", Some("the boss")).await;
    create_test_track(pool, "t1", "Thunder Road", Some(&boss), 100).await;

    let catalog = SqliteCatalog::new(pool.clone());

    let by_name = catalog.search_tracks_by_artist("springsteen").await.unwrap();
    let by_keyword = catalog.search_tracks_by_artist("Boss").await.unwrap();

    assert_eq!(by_name.len(), 1);
    assert_eq!(by_keyword.len(), 1);
    assert_eq!(by_keyword[0].artist_id, Some(boss));
}

#[tokio::test]
async fn test_search_playlists_by_name() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_playlist(pool, "p2", "Workout Mix", &[]).await;
    create_test_playlist(pool, "p1", "Chill Mix", &[]).await;
    create_test_playlist(pool, "p3", "Jazz", &[]).await;

    let catalog = SqliteCatalog::new(pool.clone());
    let hits = catalog.search_playlists_by_name("mix").await.unwrap();

    let names: Vec<_> = hits.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Chill Mix", "Workout Mix"]);
}

#[tokio::test]
async fn test_search_wildcards_match_literally() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = create_test_artist(pool, "a1", "Bob Smith", Some("b_s")).await;
    create_test_track(pool, "t1", "1000 Miles", Some(&artist), 100).await;
    create_test_track(pool, "t2", "100% Pure", None, 200).await;
    create_test_track(pool, "t3", "snake_case", None, 300).await;
    create_test_track(pool, "t4", "snakeXcase", None, 400).await;
    create_test_playlist(pool, "p1", "50% Off", &[]).await;
    create_test_playlist(pool, "p2", "500 Club", &[]).await;

    let catalog = SqliteCatalog::new(pool.clone());

    let percent = catalog.search_tracks_by_title("100%").await.unwrap();
    let titles: Vec<_> = percent.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["100% Pure"]);

    let underscore = catalog.search_tracks_by_title("e_c").await.unwrap();
    let titles: Vec<_> = underscore.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["snake_case"]);

    assert!(catalog.search_tracks_by_artist("%").await.unwrap().is_empty());
    assert_eq!(catalog.search_tracks_by_artist("b_s").await.unwrap().len(), 1);

    let playlists = catalog.search_playlists_by_name("50%").await.unwrap();
    let names: Vec<_> = playlists.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["50% Off"]);
}

#[tokio::test]
async fn test_seed_fixture_loads_everything() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let fixture: encore_storage::seed::CatalogFixture = serde_json::from_value(serde_json::json!({
        "artists": [{ "id": "a1", "name": "Nina Simone", "keywords": "simone" }],
        "tracks": [
            { "id": "t1", "title": "Sinnerman", "artistId": "a1", "addedAt": 100 },
            { "id": "t2", "title": "Feeling Good", "artistId": "a1", "addedAt": 200 }
        ],
        "playlists": [{ "id": "p1", "name": "Evening", "trackIds": ["t1", "t2"] }]
    }))
    .unwrap();

    let report = encore_storage::seed::load(pool, &fixture).await.unwrap();
    assert_eq!(report.tracks, 2);

    let catalog = SqliteCatalog::new(pool.clone());
    assert_eq!(
        catalog.list_track_ids_for_playlist(&PlaylistId::new("p1")).await.unwrap(),
        vec![TrackId::new("t1"), TrackId::new("t2")]
    );
    assert_eq!(
        catalog.list_all_track_ids().await.unwrap(),
        vec![TrackId::new("t2"), TrackId::new("t1")]
    );
}
