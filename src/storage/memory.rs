//! In-memory storage
//!
//! HashMap-based store shared between handles.

use std::collections::HashMap;
use std::sync::Arc;

use crossbeam::channel::Receiver;
use parking_lot::RwLock;

use crate::error::Result;

use super::feed::next_origin;
use super::{check_quota, ChangeFeed, Storage, StorageEvent};

struct Shared {
    data: RwLock<HashMap<String, String>>,
    quota: RwLock<Option<usize>>,
    feed: ChangeFeed,
}

/// Process-local store
///
/// Cloning keeps the origin; `handle()` opens a new origin on the same data.
/// The quota belongs to the data and is shared by every handle.
#[derive(Clone)]
pub struct MemoryStorage {
    shared: Arc<Shared>,
    origin: u64,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                data: RwLock::new(HashMap::new()),
                quota: RwLock::new(None),
                feed: ChangeFeed::new(),
            }),
            origin: next_origin(),
        }
    }

    /// Create an empty store that rejects blobs above `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        let storage = Self::new();
        storage.set_quota(Some(bytes));
        storage
    }

    /// Change the per-blob limit for every handle; `None` lifts it
    pub fn set_quota(&self, bytes: Option<usize>) {
        *self.shared.quota.write() = bytes;
    }

    /// Open another handle on the same data with its own origin
    pub fn handle(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            origin: next_origin(),
        }
    }

    /// Remove every key (e.g. the user clearing site data)
    pub fn clear(&self) {
        self.shared.data.write().clear();
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.shared.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.shared.data.read().get(key).cloned())
    }

    fn write(&self, key: &str, raw: &str) -> Result<()> {
        check_quota(key, raw, *self.shared.quota.read())?;
        self.shared
            .data
            .write()
            .insert(key.to_string(), raw.to_string());
        self.shared.feed.publish(self.origin, key);
        Ok(())
    }

    fn subscribe(&self) -> Receiver<StorageEvent> {
        self.shared.feed.subscribe(self.origin)
    }
}
