//! Domain types
//!
//! Books, their identifiers and the form payloads that create or change them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CatalogError, Result};

/// Opaque, immutable book identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Generate a new random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub priority: String,
}

impl Book {
    /// Create a book with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            id: BookId::generate(),
            title: title.into(),
            author: author.into(),
            category: category.into(),
            priority: priority.into(),
        }
    }
}

/// Raw values of the add/edit form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub category: String,
    pub priority: String,
}

impl BookForm {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category: category.into(),
            priority: priority.into(),
        }
    }

    /// Names of the fields left empty, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("author", &self.author),
            ("category", &self.category),
            ("priority", &self.priority),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Turn a complete form into a new book
    pub fn into_book(self) -> Result<Book> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CatalogError::Validation(format!(
                "missing {}",
                missing.join(", ")
            )));
        }
        Ok(Book::new(self.title, self.author, self.category, self.priority))
    }
}

/// Partial update of a book's mutable fields
///
/// `None` and empty strings leave the field unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
}

impl BookUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Overwrite the fields of `book` this update carries a value for
    pub fn apply(&self, book: &mut Book) {
        fn set(field: &mut String, value: &Option<String>) {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                *field = value.to_string();
            }
        }

        set(&mut book.title, &self.title);
        set(&mut book.author, &self.author);
        set(&mut book.category, &self.category);
        set(&mut book.priority, &self.priority);
    }
}

impl From<BookForm> for BookUpdate {
    fn from(form: BookForm) -> Self {
        Self {
            title: Some(form.title),
            author: Some(form.author),
            category: Some(form.category),
            priority: Some(form.priority),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_reports_missing_fields_in_order() {
        let form = BookForm::new("Dune", "", "Sci-fi", "");
        assert_eq!(form.missing_fields(), vec!["author", "priority"]);
        assert!(matches!(form.into_book(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_update_ignores_empty_values() {
        let mut book = Book::new("Dune", "Herbert", "Sci-fi", "High");
        let id = book.id.clone();

        BookUpdate::new().title("").author("Frank Herbert").apply(&mut book);

        assert_eq!(book.id, id);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
    }

    #[test]
    fn test_book_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&BookId::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
