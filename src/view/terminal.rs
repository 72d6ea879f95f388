//! Text view
//!
//! Headless view that keeps its state in memory and renders as a plain
//! text table through `Display`.

use std::fmt;
use std::time::{Duration, Instant};

use crate::model::{Book, BookForm, BookId};

use super::{Severity, View, CATEGORY_PLACEHOLDER};

/// One rendered list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: String,
    pub priority: String,
}

impl Row {
    fn from_book(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
            priority: book.priority.clone(),
        }
    }

    /// Navigation target of this row's edit affordance
    pub fn edit_link(&self) -> String {
        format!("edit#{}", self.id)
    }
}

/// A banner and the moment it was shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

/// In-memory view rendered as text
#[derive(Debug)]
pub struct TerminalView {
    rows: Vec<Row>,
    category_options: Vec<String>,
    notification: Option<Notification>,
    notification_ttl: Duration,
    add_form: BookForm,
    edit_form: Option<BookForm>,
}

impl TerminalView {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            rows: Vec::new(),
            category_options: Vec::new(),
            notification: None,
            notification_ttl,
            add_form: BookForm::default(),
            edit_form: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Value of the row counter
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Selector options, placeholder included
    pub fn category_options(&self) -> &[String] {
        &self.category_options
    }

    /// The banner still visible at `now`
    pub fn notification_at(&self, now: Instant) -> Option<&Notification> {
        self.notification
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.shown_at) < self.notification_ttl)
    }

    /// The banner visible right now
    pub fn notification(&self) -> Option<&Notification> {
        self.notification_at(Instant::now())
    }

    /// Type into the add form
    pub fn fill_add_form(&mut self, form: BookForm) {
        self.add_form = form;
    }

    pub fn edit_form(&self) -> Option<&BookForm> {
        self.edit_form.as_ref()
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl View for TerminalView {
    fn render(&mut self, books: &[Book]) {
        self.rows = books.iter().map(Row::from_book).collect();
    }

    fn append_row(&mut self, book: &Book) {
        self.rows.push(Row::from_book(book));
    }

    fn remove_row(&mut self, id: &BookId) {
        self.rows.retain(|row| &row.id != id);
    }

    fn render_category_options(&mut self, categories: &[String]) {
        self.category_options = std::iter::once(CATEGORY_PLACEHOLDER.to_string())
            .chain(categories.iter().cloned())
            .collect();
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        self.notification = Some(Notification {
            message: message.to_string(),
            severity,
            shown_at: Instant::now(),
        });
    }

    fn add_form(&self) -> BookForm {
        self.add_form.clone()
    }

    fn clear_form(&mut self) {
        self.add_form = BookForm::default();
    }

    fn populate_edit_form(&mut self, book: &Book) {
        self.edit_form = Some(BookForm::new(
            book.title.clone(),
            book.author.clone(),
            book.category.clone(),
            book.priority.clone(),
        ));
    }

    fn close_edit_form(&mut self) {
        self.edit_form = None;
    }

    fn activate_delete(&self, index: usize) -> Option<BookId> {
        self.rows.get(index).map(|row| row.id.clone())
    }
}

impl fmt::Display for TerminalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.notification() {
            writeln!(f, "[{}] {}", n.severity, n.message)?;
        }

        if let Some(form) = &self.edit_form {
            writeln!(f, "Editing:")?;
            writeln!(f, "  title:    {}", form.title)?;
            writeln!(f, "  author:   {}", form.author)?;
            writeln!(f, "  category: {}", form.category)?;
            writeln!(f, "  priority: {}", form.priority)?;
            return Ok(());
        }

        let header = ["#", "Title", "Author", "Category", "Priority", "Edit"];
        let cells: Vec<[String; 6]> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                [
                    i.to_string(),
                    row.title.clone(),
                    row.author.clone(),
                    row.category.clone(),
                    row.priority.clone(),
                    row.edit_link(),
                ]
            })
            .collect();

        let mut widths = header.map(|h| h.chars().count());
        for line in &cells {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let write_line = |f: &mut fmt::Formatter<'_>, line: &[&str]| -> fmt::Result {
            let padded: Vec<String> = line
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect();
            writeln!(f, "{}", padded.join("  ").trim_end())
        };

        write_line(f, &header)?;
        for line in &cells {
            let refs: Vec<&str> = line.iter().map(String::as_str).collect();
            write_line(f, &refs)?;
        }
        writeln!(f, "Books: {}", self.count())?;

        if !self.category_options.is_empty() {
            writeln!(f, "Categories: {}", self.category_options[1..].join(", "))?;
        }
        Ok(())
    }
}
