//! Book Repository
//!
//! Typed CRUD over the book collection stored under `BOOKS_KEY`.
//!
//! ## Responsibilities
//! - Deserialize the whole collection on every read
//! - Persist the whole collection on every write
//! - Refuse to treat a corrupt blob as empty
//!
//! There is no cache: every call reads through to storage, so other
//! handles' writes are always visible.

use crate::error::{CatalogError, Result};
use crate::model::{Book, BookId, BookUpdate};
use crate::storage::{Storage, BOOKS_KEY};

/// Book collection backed by a `Storage`
#[derive(Clone)]
pub struct BookRepository<S> {
    storage: S,
}

impl<S: Storage> BookRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All books in stored order. A missing key or a stored `null` is an
    /// empty collection.
    pub fn list(&self) -> Result<Vec<Book>> {
        let Some(raw) = self.storage.read(BOOKS_KEY)? else {
            return Ok(Vec::new());
        };

        let books: Option<Vec<Book>> = serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!(error = %e, "book collection is corrupt");
            CatalogError::corruption(BOOKS_KEY, e)
        })?;
        Ok(books.unwrap_or_default())
    }

    /// Find a single book by id
    pub fn find(&self, id: &BookId) -> Result<Option<Book>> {
        Ok(self.list()?.into_iter().find(|book| &book.id == id))
    }

    /// Append `book` and persist
    pub fn add(&self, book: Book) -> Result<()> {
        let mut books = self.list()?;
        tracing::info!(id = %book.id, title = %book.title, "adding book");
        books.push(book);
        self.save(&books)
    }

    /// Drop every book with `id` and persist. Unknown ids are a no-op.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&self, id: &BookId) -> Result<bool> {
        let mut books = self.list()?;
        let before = books.len();
        books.retain(|book| &book.id != id);

        if books.len() == before {
            tracing::debug!(%id, "remove: no such book");
            return Ok(false);
        }

        tracing::info!(%id, "removing book");
        self.save(&books)?;
        Ok(true)
    }

    /// Apply `update` to the book with `id` and persist. Unknown ids are a
    /// no-op.
    ///
    /// Returns whether a book matched.
    pub fn update(&self, id: &BookId, update: &BookUpdate) -> Result<bool> {
        let mut books = self.list()?;
        let mut found = false;

        for book in books.iter_mut().filter(|book| &book.id == id) {
            update.apply(book);
            found = true;
        }

        if !found {
            tracing::debug!(%id, "update: no such book");
            return Ok(false);
        }

        tracing::info!(%id, "updating book");
        self.save(&books)?;
        Ok(true)
    }

    /// Overwrite the stored collection
    pub fn save(&self, books: &[Book]) -> Result<()> {
        let raw =
            serde_json::to_string(books).map_err(|e| CatalogError::Serialization(e.to_string()))?;
        self.storage.write(BOOKS_KEY, &raw)
    }

    /// Get the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
