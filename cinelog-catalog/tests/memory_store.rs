use cinelog_catalog::{Genre, MemoryStore, MovieDraft, MovieFilter, MoviePatch, MovieStore};

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
    let store = MemoryStore::new();
    let created = store
        .create(draft("Inception", vec![Genre::SciFi, Genre::Action]))
        .unwrap();

    let fetched = store.get(&created.id.to_string()).unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn list_filters_genre_case_insensitively() {
    let store = MemoryStore::new();
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
    let store = MemoryStore::new();
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
    let store = MemoryStore::new();
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
    let store = MemoryStore::new();
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
fn patch_merges_only_supplied_fields() {
    let store = MemoryStore::new();
    let created = store
        .create(draft("Inception", vec![Genre::SciFi]))
        .unwrap();

    let patch = MoviePatch {
        rate: Some(9.0),
        ..Default::default()
    };
    let updated = store
        .update(&created.id.to_string(), patch)
        .unwrap()
        .unwrap();

    assert_eq!(updated.rate, 9.0);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.year, created.year);
    assert_eq!(updated.genre, created.genre);
}

#[test]
fn delete_then_get_is_none() {
    let store = MemoryStore::new();
    let created = store
        .create(draft("Inception", vec![Genre::SciFi]))
        .unwrap();
    let id = created.id.to_string();

    assert!(store.delete(&id).unwrap());
    assert!(store.get(&id).unwrap().is_none());
    assert!(!store.delete(&id).unwrap());
}

#[test]
fn malformed_id_is_absent_not_an_error() {
    let store = MemoryStore::new();
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
fn seeded_store_serves_existing_movies() {
    let movie = draft("Heat", vec![Genre::Crime]).into_movie(uuid::Uuid::new_v4());
    let store = MemoryStore::with_movies(vec![movie.clone()]);

    let fetched = store.get(&movie.id.to_string()).unwrap().unwrap();
    assert_eq!(fetched, movie);
}
