//! View Module
//!
//! Presentation of the catalog. Views only ever receive snapshots; they
//! never read or write storage.
//!
//! ## Responsibilities
//! - Render the book list and its row count
//! - Expose a delete affordance per row that yields the row's book id
//! - Populate the category selector
//! - Show transient notifications
//! - Hold the add/edit form state

mod terminal;

pub use terminal::{Notification, Row, TerminalView};

use std::fmt;

use crate::model::{Book, BookForm, BookId};

/// Label of the first, non-selectable category option
pub const CATEGORY_PLACEHOLDER: &str = "Choose a category";

/// Notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => f.write_str("success"),
            Severity::Danger => f.write_str("danger"),
        }
    }
}

/// Everything the handlers need from a presentation layer
pub trait View {
    /// Replace the list with `books`, in the given order
    fn render(&mut self, books: &[Book]);

    /// Append a single row without re-rendering the rest
    fn append_row(&mut self, book: &Book);

    /// Drop the row showing `id`, if any
    fn remove_row(&mut self, id: &BookId);

    /// Placeholder first, then one option per category
    fn render_category_options(&mut self, categories: &[String]);

    /// Show a transient banner, replacing any visible one
    fn notify(&mut self, message: &str, severity: Severity);

    /// Current contents of the add form
    fn add_form(&self) -> BookForm;

    /// Reset the add form
    fn clear_form(&mut self);

    /// Fill the edit form with `book`
    fn populate_edit_form(&mut self, book: &Book);

    /// Leave the edit page; the listing is shown again
    fn close_edit_form(&mut self);

    /// Activate the delete affordance of row `index`, yielding its book id
    fn activate_delete(&self, index: usize) -> Option<BookId>;
}
