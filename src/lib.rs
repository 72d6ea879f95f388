//! # Bookshelf
//!
//! A local book catalog with:
//! - Add / edit / delete of book records
//! - View-only sorting and filtering
//! - A user-extensible category list
//! - Pluggable key-value persistence (in-memory or file-backed)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Catalog (handlers)                       │
//! │        add · edit · delete · sort · filter · category        │
//! └───────────┬─────────────────────┬───────────────────┬───────┘
//!             │                     │                   │
//!             ▼                     ▼                   ▼
//!   ┌──────────────────┐  ┌──────────────────┐  ┌──────────────┐
//!   │  BookRepository  │  │ CategoryRegistry │  │     View     │
//!   │   key "books"    │  │ key "categories" │  │  (snapshots) │
//!   └────────┬─────────┘  └────────┬─────────┘  └──────────────┘
//!            │                     │
//!            └──────────┬──────────┘
//!                       ▼
//!              ┌─────────────────┐
//!              │     Storage     │
//!              │ (memory / file) │
//!              └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod storage;
pub mod repository;
pub mod categories;
pub mod query;
pub mod view;
pub mod catalog;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CatalogError, Result};
pub use config::{Config, FilterMode};
pub use catalog::{Catalog, Page};
pub use model::{Book, BookForm, BookId, BookUpdate};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Bookshelf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
