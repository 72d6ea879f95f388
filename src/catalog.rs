//! Catalog Module
//!
//! Command handlers that coordinate the repository, the category registry
//! and a view.
//!
//! ## Responsibilities
//! - Run exactly one user action per call, to completion
//! - Mutate through the repository/registry, then re-render from them
//! - Report every failure through the view's notification channel
//! - React to storage changes made by other handles

use crossbeam::channel::Receiver;

use crate::config::{Config, FilterMode};
use crate::categories::CategoryRegistry;
use crate::error::{CatalogError, Result};
use crate::model::{Book, BookForm, BookId, BookUpdate};
use crate::query::{filter_books, sort_books, BookFilter, SortKey};
use crate::repository::BookRepository;
use crate::storage::{Storage, StorageEvent, BOOKS_KEY, CATEGORIES_KEY};
use crate::view::{Severity, View};

/// Route of the listing page
pub const LISTING_ROUTE: &str = "index";

/// Where the user ends up after an edit-page action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Stay on the edit page, showing this book
    Edit(Book),
    /// Navigate to the listing
    Listing,
}

impl Page {
    /// Navigation target for this page
    pub fn route(&self) -> String {
        match self {
            Page::Edit(book) => format!("edit#{}", book.id),
            Page::Listing => LISTING_ROUTE.to_string(),
        }
    }
}

/// Extract the book id from navigation state.
///
/// Accepts `edit#<id>`, `#<id>` or a bare id. An empty id yields `None`.
pub fn parse_fragment(location: &str) -> Option<BookId> {
    let id = match location.split_once('#') {
        Some((_, fragment)) => fragment,
        None => location,
    };
    (!id.is_empty()).then(|| BookId::from(id))
}

/// The catalog application: storage-backed state plus a view
pub struct Catalog<S, V> {
    books: BookRepository<S>,
    categories: CategoryRegistry<S>,
    view: V,
    filter_mode: FilterMode,
    changes: Receiver<StorageEvent>,
}

impl<S: Storage + Clone, V: View> Catalog<S, V> {
    // =========================================================================
    // Messages
    // =========================================================================
    const MSG_FILL_ALL: &'static str = "Please fill in all fields";
    const MSG_ADDED: &'static str = "Book added";
    const MSG_REMOVED: &'static str = "Book removed";
    const MSG_UPDATED: &'static str = "Book updated";

    /// Open the catalog and render the initial page
    ///
    /// Renders the stored list and the category selector, the way a page
    /// load would. A corrupt book blob is reported and returned.
    pub fn open(storage: S, view: V, config: &Config) -> Result<Self> {
        let changes = storage.subscribe();
        let mut catalog = Self {
            books: BookRepository::new(storage.clone()),
            categories: CategoryRegistry::new(storage),
            view,
            filter_mode: config.filter_mode,
            changes,
        };

        catalog.refresh_categories()?;
        catalog.refresh()?;
        Ok(catalog)
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    /// Add a book from a submitted form
    pub fn add(&mut self, form: BookForm) -> Result<Book> {
        let book = match form.into_book() {
            Ok(book) => book,
            Err(e) => {
                self.view.notify(Self::MSG_FILL_ALL, Severity::Danger);
                return Err(e);
            }
        };

        let result = self.books.add(book.clone());
        self.report(result)?;

        self.view.append_row(&book);
        self.view.notify(Self::MSG_ADDED, Severity::Success);
        self.view.clear_form();
        Ok(book)
    }

    /// Submit whatever the view's add form currently holds
    pub fn submit_add(&mut self) -> Result<Book> {
        let form = self.view.add_form();
        self.add(form)
    }

    /// Open the edit page for the book named in `location`
    pub fn load_edit(&mut self, location: &str) -> Result<Page> {
        let Some(id) = parse_fragment(location) else {
            tracing::debug!(location, "edit: no id in location, redirecting");
            self.view.close_edit_form();
            return Ok(Page::Listing);
        };

        let result = self.books.find(&id);
        match self.report(result)? {
            Some(book) => {
                self.view.populate_edit_form(&book);
                Ok(Page::Edit(book))
            }
            None => {
                tracing::debug!(%id, "edit: no such book, redirecting");
                self.view.close_edit_form();
                Ok(Page::Listing)
            }
        }
    }

    /// Save the edit form for `id`, then return to the listing
    pub fn submit_edit(&mut self, id: &BookId, form: BookForm) -> Result<Page> {
        let result = self.books.update(id, &BookUpdate::from(form));
        if !self.report(result)? {
            let err = CatalogError::NotFound(id.to_string());
            self.view.notify(&err.to_string(), Severity::Danger);
            return Err(err);
        }

        self.view.close_edit_form();
        self.refresh()?;
        self.view.notify(Self::MSG_UPDATED, Severity::Success);
        Ok(Page::Listing)
    }

    /// Delete the book with `id`
    ///
    /// Returns whether a stored book was removed; unknown ids are a no-op.
    pub fn delete(&mut self, id: &BookId) -> Result<bool> {
        let result = self.books.remove(id);
        let removed = self.report(result)?;

        self.view.remove_row(id);
        if removed {
            self.view.notify(Self::MSG_REMOVED, Severity::Success);
        }
        Ok(removed)
    }

    /// Activate the delete affordance of rendered row `index`
    pub fn delete_row(&mut self, index: usize) -> Result<bool> {
        match self.view.activate_delete(index) {
            Some(id) => self.delete(&id),
            None => Ok(false),
        }
    }

    /// Render the stored books in `key` order. Storage keeps its order.
    pub fn sort(&mut self, key: SortKey) -> Result<()> {
        let result = self.books.list();
        let books = sort_books(self.report(result)?, key);
        self.view.render(&books);
        Ok(())
    }

    /// Render the stored books passing `filter`
    ///
    /// An empty result leaves the current render untouched. Returns the
    /// number of matches.
    pub fn filter(&mut self, filter: &BookFilter) -> Result<usize> {
        let result = self.books.list();
        let matches = filter_books(self.report(result)?, filter, self.filter_mode);

        if !matches.is_empty() {
            self.view.render(&matches);
        }
        Ok(matches.len())
    }

    /// Append a category, then re-render the selector from storage
    pub fn add_category(&mut self, name: &str) -> Result<bool> {
        let added = self.categories.add(name);
        let refreshed = self.refresh_categories();
        let added = self.report(added)?;
        refreshed?;
        Ok(added)
    }

    // =========================================================================
    // Re-rendering
    // =========================================================================

    /// Re-render the list from the repository
    pub fn refresh(&mut self) -> Result<()> {
        let result = self.books.list();
        let books = self.report(result)?;
        self.view.render(&books);
        Ok(())
    }

    /// Re-render the category selector from the registry
    pub fn refresh_categories(&mut self) -> Result<()> {
        let result = self.categories.list();
        let categories = self.report(result)?;
        self.view.render_category_options(&categories);
        Ok(())
    }

    /// React to storage changes made through other handles
    ///
    /// Returns the number of events handled.
    pub fn poll_changes(&mut self) -> Result<usize> {
        let events: Vec<StorageEvent> = self.changes.try_iter().collect();
        for event in &events {
            tracing::debug!(key = %event.key, "external storage change");
            match event.key.as_str() {
                BOOKS_KEY => self.refresh()?,
                CATEGORIES_KEY => self.refresh_categories()?,
                _ => {}
            }
        }
        Ok(events.len())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn books(&self) -> &BookRepository<S> {
        &self.books
    }

    pub fn categories(&self) -> &CategoryRegistry<S> {
        &self.categories
    }

    /// Surface a failure to the user and pass it on
    fn report<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            tracing::warn!(error = %e, "operation failed");
            self.view.notify(&e.to_string(), Severity::Danger);
        }
        result
    }
}
