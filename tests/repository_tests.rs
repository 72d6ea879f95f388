//! Tests for BookRepository and CategoryRegistry
//!
//! These tests verify:
//! - add/list round trips in insertion order
//! - remove and update are no-ops for unknown ids
//! - partial updates only touch non-empty fields
//! - corrupt book data is an error, corrupt category data falls back

use bookshelf::categories::{CategoryRegistry, DEFAULT_CATEGORIES};
use bookshelf::repository::BookRepository;
use bookshelf::storage::{MemoryStorage, Storage, BOOKS_KEY, CATEGORIES_KEY};
use bookshelf::{Book, BookId, BookUpdate, CatalogError};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_repository() -> (MemoryStorage, BookRepository<MemoryStorage>) {
    let storage = MemoryStorage::new();
    let repository = BookRepository::new(storage.clone());
    (storage, repository)
}

fn dune() -> Book {
    Book::new("Dune", "Herbert", "Sci-fi", "High")
}

fn defaults() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

// =============================================================================
// Book Repository Tests
// =============================================================================

#[test]
fn test_list_missing_key_is_empty() {
    let (_storage, repository) = setup_repository();
    assert!(repository.list().unwrap().is_empty());
}

#[test]
fn test_add_then_list() {
    let (_storage, repository) = setup_repository();
    let book = dune();

    repository.add(book.clone()).unwrap();

    assert_eq!(repository.list().unwrap(), vec![book]);
}

#[test]
fn test_add_preserves_insertion_order() {
    let (_storage, repository) = setup_repository();
    let books: Vec<Book> = (0..5)
        .map(|i| Book::new(format!("Title {}", i), "Author", "Drama", "1"))
        .collect();

    for book in &books {
        repository.add(book.clone()).unwrap();
    }

    assert_eq!(repository.list().unwrap(), books);
}

#[test]
fn test_add_then_remove_scenario() {
    let (_storage, repository) = setup_repository();
    let book = dune();

    repository.add(book.clone()).unwrap();
    assert_eq!(repository.list().unwrap().len(), 1);

    assert!(repository.remove(&book.id).unwrap());
    assert_eq!(repository.list().unwrap().len(), 0);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let (storage, repository) = setup_repository();
    repository.add(dune()).unwrap();
    let before = storage.read(BOOKS_KEY).unwrap();

    assert!(!repository.remove(&BookId::from("missing")).unwrap());

    assert_eq!(storage.read(BOOKS_KEY).unwrap(), before);
}

#[test]
fn test_remove_twice_is_idempotent() {
    let (_storage, repository) = setup_repository();
    let keep = Book::new("Keep", "A", "Drama", "1");
    let gone = dune();
    repository.add(keep.clone()).unwrap();
    repository.add(gone.clone()).unwrap();

    repository.remove(&gone.id).unwrap();
    repository.remove(&gone.id).unwrap();

    assert_eq!(repository.list().unwrap(), vec![keep]);
}

#[test]
fn test_update_single_field() {
    let (_storage, repository) = setup_repository();
    let book = dune();
    repository.add(book.clone()).unwrap();

    assert!(repository
        .update(&book.id, &BookUpdate::new().author("X"))
        .unwrap());

    let stored = repository.find(&book.id).unwrap().unwrap();
    assert_eq!(stored.author, "X");
    assert_eq!(stored.title, book.title);
    assert_eq!(stored.category, book.category);
    assert_eq!(stored.priority, book.priority);
    assert_eq!(stored.id, book.id);
}

#[test]
fn test_update_empty_string_does_not_overwrite() {
    let (_storage, repository) = setup_repository();
    let book = dune();
    repository.add(book.clone()).unwrap();

    repository
        .update(&book.id, &BookUpdate::new().title(""))
        .unwrap();

    assert_eq!(repository.find(&book.id).unwrap().unwrap().title, "Dune");
}

#[test]
fn test_update_unknown_id_is_noop() {
    let (_storage, repository) = setup_repository();
    let book = dune();
    repository.add(book.clone()).unwrap();

    let updated = repository
        .update(&BookId::from("missing"), &BookUpdate::new().title("Other"))
        .unwrap();

    assert!(!updated);
    assert_eq!(repository.list().unwrap(), vec![book]);
}

#[test]
fn test_save_overwrites_collection() {
    let (_storage, repository) = setup_repository();
    repository.add(dune()).unwrap();
    let replacement = vec![Book::new("Only", "One", "Poetry", "2")];

    repository.save(&replacement).unwrap();

    assert_eq!(repository.list().unwrap(), replacement);
}

#[test]
fn test_corrupt_books_is_an_error() {
    let (storage, repository) = setup_repository();
    storage.write(BOOKS_KEY, "{not json").unwrap();

    let err = repository.list().unwrap_err();

    assert!(matches!(err, CatalogError::DataCorruption { ref key, .. } if key == BOOKS_KEY));
    assert!(repository.add(dune()).is_err());
    assert_eq!(storage.read(BOOKS_KEY).unwrap(), Some("{not json".to_string()));
}

#[test]
fn test_stored_null_is_empty() {
    let (storage, repository) = setup_repository();
    storage.write(BOOKS_KEY, "null").unwrap();

    assert!(repository.list().unwrap().is_empty());

    repository.add(dune()).unwrap();
    assert_eq!(repository.list().unwrap().len(), 1);
}

#[test]
fn test_reads_wire_format() {
    let (storage, repository) = setup_repository();
    storage
        .write(
            BOOKS_KEY,
            r#"[{"id":"b1","title":"Dune","author":"Herbert","category":"Sci-fi","priority":"High"}]"#,
        )
        .unwrap();

    let books = repository.list().unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, BookId::from("b1"));
    assert_eq!(books[0].title, "Dune");
}

#[test]
fn test_write_failure_leaves_collection_unchanged() {
    let storage = MemoryStorage::with_quota(200);
    let repository = BookRepository::new(storage.clone());
    let book = dune();
    repository.add(book.clone()).unwrap();

    let err = repository
        .add(Book::new("x".repeat(300), "A", "Drama", "1"))
        .unwrap_err();

    assert!(matches!(err, CatalogError::StorageWrite { .. }));
    assert_eq!(repository.list().unwrap(), vec![book]);
}

// =============================================================================
// Category Registry Tests
// =============================================================================

#[test]
fn test_categories_default_when_missing() {
    let registry = CategoryRegistry::new(MemoryStorage::new());
    assert_eq!(registry.list().unwrap(), defaults());
}

#[test]
fn test_categories_default_when_corrupt() {
    let storage = MemoryStorage::new();
    storage.write(CATEGORIES_KEY, "not json at all").unwrap();
    let registry = CategoryRegistry::new(storage);

    let categories = registry.list().unwrap();

    assert_eq!(categories.len(), 6);
    assert_eq!(categories, defaults());
}

#[test]
fn test_categories_add_appends_to_defaults() {
    let registry = CategoryRegistry::new(MemoryStorage::new());

    assert!(registry.add("Horror").unwrap());

    let mut expected = defaults();
    expected.push("Horror".to_string());
    assert_eq!(registry.list().unwrap(), expected);
}

#[test]
fn test_categories_empty_name_ignored() {
    let storage = MemoryStorage::new();
    let registry = CategoryRegistry::new(storage.clone());

    assert!(!registry.add("").unwrap());

    assert_eq!(storage.read(CATEGORIES_KEY).unwrap(), None);
}

#[test]
fn test_categories_duplicates_kept() {
    let registry = CategoryRegistry::new(MemoryStorage::new());

    registry.add("Drama").unwrap();

    let categories = registry.list().unwrap();
    assert_eq!(categories.iter().filter(|c| *c == "Drama").count(), 2);
    assert_eq!(categories.last().map(String::as_str), Some("Drama"));
}
