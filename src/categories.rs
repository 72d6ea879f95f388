//! Category Registry
//!
//! User-extensible category list stored under `CATEGORIES_KEY`.

use crate::error::{CatalogError, Result};
use crate::storage::{Storage, CATEGORIES_KEY};

/// Categories every catalog starts with, in display order
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Crime",
    "Sci-fi",
    "Fantasy",
    "Poetry",
    "Drama",
    "Exact-Sciences",
];

fn defaults() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Category list backed by a `Storage`
#[derive(Clone)]
pub struct CategoryRegistry<S> {
    storage: S,
}

impl<S: Storage> CategoryRegistry<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored categories in insertion order.
    ///
    /// A missing or unparseable blob yields `DEFAULT_CATEGORIES`. Only a
    /// failing read is an error.
    pub fn list(&self) -> Result<Vec<String>> {
        let Some(raw) = self.storage.read(CATEGORIES_KEY)? else {
            return Ok(defaults());
        };

        match serde_json::from_str(&raw) {
            Ok(categories) => Ok(categories),
            Err(e) => {
                tracing::warn!(error = %e, "category list is corrupt, using defaults");
                Ok(defaults())
            }
        }
    }

    /// Append `name` and persist. Empty names are ignored; duplicates are
    /// kept.
    ///
    /// Returns whether the list changed.
    pub fn add(&self, name: &str) -> Result<bool> {
        if name.is_empty() {
            return Ok(false);
        }

        let mut categories = self.list()?;
        categories.push(name.to_string());

        let raw = serde_json::to_string(&categories)
            .map_err(|e| CatalogError::Serialization(e.to_string()))?;
        self.storage.write(CATEGORIES_KEY, &raw)?;

        tracing::info!(category = name, total = categories.len(), "added category");
        Ok(true)
    }
}
