use cinelog_catalog::{Genre, MovieDraft, MovieFilter, MoviePatch, MovieStore};
use cinelog_db::SqliteStore;
use rusqlite::Connection;

fn draft(title: &str, genre: Vec<Genre>) -> MovieDraft {
    MovieDraft {
        title: title.to_string(),
        year: 2010,
        director: "Christopher Nolan".to_string(),
        duration: 148,
        poster: "https://example.com/poster.jpg".to_string(),
        genre,
        rate: 8.8,
    }
}

#[test]
fn create_then_get_round_trips() {
    let store = SqliteStore::open_in_memory().unwrap();
    let created = store
        .create(draft("Inception", vec![Genre::SciFi, Genre::Action]))
        .unwrap();

    let fetched = store.get(&created.id.to_string()).unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.genre, vec![Genre::SciFi, Genre::Action]);
}

#[test]
fn ids_render_as_canonical_uuid_text() {
    let store = SqliteStore::open_in_memory().unwrap();
    let created = store.create(draft("Heat", vec![Genre::Crime])).unwrap();

    let rendered = created.id.to_string();
    assert_eq!(rendered.len(), 36);
    assert!(store.get(&rendered).unwrap().is_some());
}

#[test]
fn create_links_every_listed_genre() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.db");

    let store = SqliteStore::open(&path).unwrap();
    store
        .create(draft(
            "Inception",
            vec![Genre::Action, Genre::Adventure, Genre::SciFi],
        ))
        .unwrap();
    drop(store);

    let conn = Connection::open(&path).unwrap();
    let links: i32 = conn
        .query_row("SELECT COUNT(*) FROM movie_genres", [], |row| row.get(0))
        .unwrap();
    assert_eq!(links, 3);
}

#[test]
fn genre_filter_is_case_insensitive() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .create(draft("Inception", vec![Genre::SciFi]))
        .unwrap();
    store.create(draft("Heat", vec![Genre::Crime])).unwrap();

    let lower = store
        .list(&MovieFilter {
            genre: Some("sci-fi".to_string()),
        })
        .unwrap();
    let canonical = store
        .list(&MovieFilter {
            genre: Some("Sci-Fi".to_string()),
        })
        .unwrap();
    assert_eq!(lower, canonical);
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].title, "Inception");
}

#[test]
fn unknown_genre_filter_yields_empty_not_error() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .create(draft("Inception", vec![Genre::SciFi]))
        .unwrap();

    let movies = store
        .list(&MovieFilter {
            genre: Some("Nonexistent".to_string()),
        })
        .unwrap();
    assert!(movies.is_empty());
}

#[test]
fn list_preserves_insertion_order() {
    let store = SqliteStore::open_in_memory().unwrap();
    for title in ["First", "Second", "Third"] {
        store.create(draft(title, vec![Genre::Drama])).unwrap();
    }

    let titles: Vec<String> = store
        .list(&MovieFilter::default())
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[test]
fn empty_patch_returns_record_unchanged() {
    let store = SqliteStore::open_in_memory().unwrap();
    let created = store
        .create(draft("Inception", vec![Genre::SciFi]))
        .unwrap();

    let updated = store
        .update(&created.id.to_string(), MoviePatch::default())
        .unwrap()
        .unwrap();
    assert_eq!(updated, created);
}

#[test]
fn patch_updates_scalars_and_leaves_genre_links_alone() {
    let store = SqliteStore::open_in_memory().unwrap();
    let created = store
        .create(draft("Inception", vec![Genre::SciFi]))
        .unwrap();

    let patch = MoviePatch {
        rate: Some(9.0),
        genre: Some(vec![Genre::Drama]),
        ..Default::default()
    };
    let updated = store
        .update(&created.id.to_string(), patch)
        .unwrap()
        .unwrap();

    assert_eq!(updated.rate, 9.0);
    assert_eq!(updated.title, created.title);
    // Genre links are not revised on update.
    assert_eq!(updated.genre, vec![Genre::SciFi]);
}

#[test]
fn update_unknown_id_is_none() {
    let store = SqliteStore::open_in_memory().unwrap();
    let patch = MoviePatch {
        rate: Some(9.0),
        ..Default::default()
    };
    let updated = store
        .update("4b1f8c9e-2f60-4e8a-9b3c-5f8f6f0a2d11", patch)
        .unwrap();
    assert!(updated.is_none());
}

#[test]
fn delete_removes_movie_and_cascades_links() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.db");

    let store = SqliteStore::open(&path).unwrap();
    let created = store
        .create(draft("Inception", vec![Genre::SciFi, Genre::Action]))
        .unwrap();
    let id = created.id.to_string();

    assert!(store.delete(&id).unwrap());
    assert!(store.get(&id).unwrap().is_none());
    assert!(!store.delete(&id).unwrap());
    drop(store);

    let conn = Connection::open(&path).unwrap();
    let links: i32 = conn
        .query_row("SELECT COUNT(*) FROM movie_genres", [], |row| row.get(0))
        .unwrap();
    assert_eq!(links, 0);
}

#[test]
fn malformed_id_is_absent_not_an_error() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.get("not-a-uuid").unwrap().is_none());
    assert!(!store.delete("not-a-uuid").unwrap());
    assert!(
        store
            .update("not-a-uuid", MoviePatch::default())
            .unwrap()
            .is_none()
    );
}

#[test]
fn movies_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movies.db");

    let id = {
        let store = SqliteStore::open(&path).unwrap();
        store
            .create(draft("Inception", vec![Genre::SciFi]))
            .unwrap()
            .id
            .to_string()
    };

    let store = SqliteStore::open(&path).unwrap();
    let fetched = store.get(&id).unwrap().unwrap();
    assert_eq!(fetched.title, "Inception");
}
