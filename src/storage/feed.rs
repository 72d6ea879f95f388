//! Change feed
//!
//! Fan-out of `StorageEvent`s between handles of one store.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;

use super::StorageEvent;

static NEXT_ORIGIN: AtomicU64 = AtomicU64::new(1);

/// Allocate a fresh handle origin
pub(crate) fn next_origin() -> u64 {
    NEXT_ORIGIN.fetch_add(1, Ordering::Relaxed)
}

/// Subscribers of one store, tagged with the origin that registered them
#[derive(Default)]
pub struct ChangeFeed {
    subscribers: Mutex<Vec<(u64, Sender<StorageEvent>)>>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber for `origin`
    pub fn subscribe(&self, origin: u64) -> Receiver<StorageEvent> {
        let (tx, rx) = channel::unbounded();
        self.subscribers.lock().push((origin, tx));
        rx
    }

    /// Deliver a change of `key` to every origin except the writer's.
    /// Subscribers whose receiver was dropped are pruned.
    pub fn publish(&self, origin: u64, key: &str) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|(subscriber, tx)| {
            if *subscriber == origin {
                return true;
            }
            tx.send(StorageEvent {
                key: key.to_string(),
            })
            .is_ok()
        });
    }
}
