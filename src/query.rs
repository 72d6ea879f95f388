//! Sorting and filtering
//!
//! Pure functions over book snapshots. Nothing here touches storage.

use std::cmp::Ordering;

use crate::config::FilterMode;
use crate::model::Book;

/// Ordering requested by the sort form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Category, case-insensitive ascending
    Category,
    /// Author, case-insensitive ascending
    Author,
    /// Priority, descending
    Priority,
    /// Keep stored order
    Unsorted,
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s {
            "byCategory" | "category" => SortKey::Category,
            "byAuthor" | "author" => SortKey::Author,
            "byPriority" | "priority" => SortKey::Priority,
            _ => SortKey::Unsorted,
        }
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Stable sort of `books` by `key`; equal elements keep their input order
pub fn sort_books(mut books: Vec<Book>, key: SortKey) -> Vec<Book> {
    match key {
        SortKey::Category => books.sort_by(|a, b| cmp_ignore_case(&a.category, &b.category)),
        SortKey::Author => books.sort_by(|a, b| cmp_ignore_case(&a.author, &b.author)),
        SortKey::Priority => books.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortKey::Unsorted => {}
    }
    books
}

/// Substring filters from the filter form; empty fields are inactive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub author: String,
    pub category: String,
    pub priority: String,
}

impl BookFilter {
    pub fn new(
        author: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            category: category.into(),
            priority: priority.into(),
        }
    }

    /// Active (field value, needle) pairs in precedence order
    fn active<'a>(&'a self, book: &'a Book) -> impl Iterator<Item = (&'a str, &'a str)> {
        [
            (book.author.as_str(), self.author.as_str()),
            (book.category.as_str(), self.category.as_str()),
            (book.priority.as_str(), self.priority.as_str()),
        ]
        .into_iter()
        .filter(|(_, needle)| !needle.is_empty())
    }

    /// Whether `book` passes under `mode`. A filter with no active field
    /// matches everything.
    pub fn matches(&self, book: &Book, mode: FilterMode) -> bool {
        let contains = |(haystack, needle): (&str, &str)| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };

        match mode {
            FilterMode::FirstMatch => self.active(book).next().map_or(true, contains),
            FilterMode::AllOf => self.active(book).all(contains),
        }
    }
}

/// Books passing `filter`, in input order
pub fn filter_books(books: Vec<Book>, filter: &BookFilter, mode: FilterMode) -> Vec<Book> {
    books
        .into_iter()
        .filter(|book| filter.matches(book, mode))
        .collect()
}
