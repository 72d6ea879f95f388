//! Error types for Bookshelf
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Unified error type for Bookshelf operations
#[derive(Debug, Error)]
pub enum CatalogError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // User Input Errors
    // -------------------------------------------------------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Book not found: {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Stored data under '{key}' is corrupt: {reason}")]
    DataCorruption { key: String, reason: String },

    #[error("Failed to write '{key}': {reason}")]
    StorageWrite { key: String, reason: String },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Build a write failure for `key`
    pub fn storage_write(key: &str, reason: impl ToString) -> Self {
        CatalogError::StorageWrite {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Build a corruption error for `key`
    pub fn corruption(key: &str, reason: impl ToString) -> Self {
        CatalogError::DataCorruption {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
