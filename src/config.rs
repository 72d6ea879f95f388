//! Configuration for Bookshelf
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::CatalogError;

/// Main configuration for a Bookshelf instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the file-backed store
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── books.json       (book collection)
    ///     └── categories.json  (category list)
    pub data_dir: PathBuf,

    /// Upper bound on the size of a single stored blob (in bytes).
    /// `None` means unlimited.
    pub storage_quota: Option<usize>,

    // -------------------------------------------------------------------------
    // View Configuration
    // -------------------------------------------------------------------------
    /// How long a notification banner stays visible
    pub notification_ttl: Duration,

    // -------------------------------------------------------------------------
    // Filter Configuration
    // -------------------------------------------------------------------------
    /// How multiple filter fields combine
    pub filter_mode: FilterMode,
}

/// How the author/category/priority filter fields combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Only the first non-empty field (author, then category, then priority)
    /// decides inclusion
    #[default]
    FirstMatch,

    /// Every non-empty field must match
    AllOf,
}

impl FromStr for FilterMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-match" => Ok(FilterMode::FirstMatch),
            "all-of" => Ok(FilterMode::AllOf),
            other => Err(CatalogError::Config(format!(
                "unknown filter mode '{}' (expected first-match or all-of)",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./bookshelf_data"),
            storage_quota: None,
            notification_ttl: Duration::from_secs(3),
            filter_mode: FilterMode::FirstMatch,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Limit the size of any single stored blob
    pub fn storage_quota(mut self, bytes: usize) -> Self {
        self.config.storage_quota = Some(bytes);
        self
    }

    /// Set how long notifications stay visible
    pub fn notification_ttl(mut self, ttl: Duration) -> Self {
        self.config.notification_ttl = ttl;
        self
    }

    /// Set the filter combination mode
    pub fn filter_mode(mut self, mode: FilterMode) -> Self {
        self.config.filter_mode = mode;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
