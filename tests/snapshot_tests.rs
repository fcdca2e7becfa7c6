//! Snapshot persistence tests

use libris::{
    catalog::Catalog,
    models::{Book, Borrower},
    snapshot::SnapshotStore,
};

fn populated_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_book(Book::new("Book 1", "Author 1", "ISBN1"));
    catalog.add_book(Book::new("Book 2", "Author 2", "ISBN2"));
    catalog.register_borrower(Borrower::new("Borrower 1", "borrower1@example.com"));
    catalog.register_borrower(Borrower::new("Borrower 2", "borrower2@example.com"));
    catalog
        .borrow_book("borrower2@example.com", "Book 1")
        .unwrap();
    catalog
}

#[test]
fn test_round_trip_preserves_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("library.json"));

    let catalog = populated_catalog();
    store.save(&catalog).unwrap();
    let loaded = store.load();

    assert_eq!(loaded, catalog);

    // Borrow assignments survive the round trip
    let borrower = loaded.borrower_by_email("borrower2@example.com").unwrap();
    assert_eq!(borrower.borrowed_books().len(), 1);
    assert_eq!(borrower.borrowed_books()[0].title, "Book 1");
    assert!(loaded.book_by_title("Book 1").is_none());
}

#[test]
fn test_load_missing_file_yields_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("absent.json"));

    let loaded = store.load();
    assert!(loaded.available_books().is_empty());
    assert!(loaded.borrowers().is_empty());
}

#[test]
fn test_load_corrupt_file_yields_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(&path, "not a snapshot").unwrap();

    let loaded = SnapshotStore::new(&path).load();
    assert_eq!(loaded, Catalog::new());
}

#[test]
fn test_load_unsupported_version_yields_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(
        &path,
        r#"{"version":99,"saved_at":"2026-01-01T00:00:00Z","books":[],"borrowers":[]}"#,
    )
    .unwrap();

    let loaded = SnapshotStore::new(&path).load();
    assert_eq!(loaded, Catalog::new());
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("library.json"));

    store.save(&populated_catalog()).unwrap();

    let mut smaller = Catalog::new();
    smaller.add_book(Book::new("Only Book", "Only Author", "ISBN"));
    store.save(&smaller).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, smaller);
}

#[test]
fn test_save_to_unwritable_path_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("missing-dir").join("library.json"));

    assert!(store.save(&Catalog::new()).is_err());
}

#[test]
fn test_empty_catalog_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("library.json"));

    store.save(&Catalog::new()).unwrap();
    assert_eq!(store.load(), Catalog::new());
}
