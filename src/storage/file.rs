//! File-backed storage
//!
//! One `{key}.json` file per key inside the data directory.
//!
//! Writes go to `{key}.json.tmp` first and are renamed into place, so a
//! failed write leaves the previous blob untouched.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossbeam::channel::Receiver;

use crate::error::{CatalogError, Result};

use super::feed::next_origin;
use super::{check_quota, ChangeFeed, Storage, StorageEvent};

/// Directory-backed store
#[derive(Clone)]
pub struct FileStorage {
    dir: PathBuf,
    feed: Arc<ChangeFeed>,
    origin: u64,
    quota: Option<usize>,
}

impl FileStorage {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    const EXTENSION: &'static str = "json";
    const TMP_SUFFIX: &'static str = ".tmp";

    /// Open or create a store in `dir`
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            feed: Arc::new(ChangeFeed::new()),
            origin: next_origin(),
            quota: None,
        })
    }

    /// Open a store that rejects blobs above `bytes`
    pub fn open_with_quota(dir: &Path, bytes: Option<usize>) -> Result<Self> {
        let mut storage = Self::open(dir)?;
        storage.quota = bytes;
        Ok(storage)
    }

    /// Open another handle on the same directory with its own origin
    pub fn handle(&self) -> Self {
        Self {
            dir: self.dir.clone(),
            feed: Arc::clone(&self.feed),
            origin: next_origin(),
            quota: self.quota,
        }
    }

    /// Get the data directory path
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// "books" → "{dir}/books.json"
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CatalogError::Config(format!(
                "invalid storage key '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.{}", key, Self::EXTENSION)))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => {
                tracing::debug!(key, bytes = raw.len(), "read blob");
                Ok(Some(raw))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, raw: &str) -> Result<()> {
        check_quota(key, raw, self.quota)?;
        let path = self.path_for(key)?;

        let mut tmp = path.clone().into_os_string();
        tmp.push(Self::TMP_SUFFIX);
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, raw).map_err(|e| CatalogError::storage_write(key, e))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(CatalogError::storage_write(key, e));
        }

        tracing::debug!(key, bytes = raw.len(), "wrote blob");
        self.feed.publish(self.origin, key);
        Ok(())
    }

    fn subscribe(&self) -> Receiver<StorageEvent> {
        self.feed.subscribe(self.origin)
    }
}
