//! Storage Module
//!
//! Key-value persistence for raw string blobs.
//!
//! ## Responsibilities
//! - Read and write one opaque string per key
//! - Report a missing key as `None`, never as an error
//! - Enforce an optional per-blob size quota
//! - Notify other handles on the same store when a key changes
//!
//! ## Handles
//! ```text
//!   ┌───────────┐   write("books")   ┌─────────────────┐
//!   │ handle A  │ ─────────────────▶ │  shared store   │
//!   └───────────┘                    └────────┬────────┘
//!                                             │ StorageEvent { key: "books" }
//!                  ┌───────────┐              │
//!                  │ handle B  │ ◀────────────┘  (never delivered back to A)
//!                  └───────────┘
//! ```
//! A handle plays the role of one browser tab: clones share an origin,
//! `handle()` opens a new one.

mod feed;
mod file;
mod memory;

pub use feed::ChangeFeed;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use crossbeam::channel::Receiver;

use crate::error::{CatalogError, Result};

/// Key holding the serialized book collection
pub const BOOKS_KEY: &str = "books";

/// Key holding the serialized category list
pub const CATEGORIES_KEY: &str = "categories";

/// Emitted to other handles after a key was overwritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: String,
}

/// A synchronous string key-value store
pub trait Storage {
    /// Read the blob stored under `key`, `None` if absent
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob stored under `key`
    fn write(&self, key: &str, raw: &str) -> Result<()>;

    /// Receive change events caused by other handles
    fn subscribe(&self) -> Receiver<StorageEvent> {
        crossbeam::channel::never()
    }
}

/// Reject blobs larger than the configured quota
fn check_quota(key: &str, raw: &str, quota: Option<usize>) -> Result<()> {
    match quota {
        Some(limit) if raw.len() > limit => Err(CatalogError::storage_write(
            key,
            format!("quota exceeded ({} > {} bytes)", raw.len(), limit),
        )),
        _ => Ok(()),
    }
}
