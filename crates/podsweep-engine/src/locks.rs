//! Per-collection mutual exclusion for batch runs.
//!
//! Two overlapping batch runs against the same collection would race each
//! other's deletes and produce interleaved, unauditable progress logs. When
//! the engine is embedded in a long-lived caller, runs for the same
//! collection id must be serialized; runs for distinct ids proceed
//! independently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-collection run locks.
///
/// [`RunLocks::acquire`] returns an owned guard; the lock is held until the
/// guard is dropped, so callers wrap the whole fetch-and-execute sequence in
/// its scope.
#[derive(Debug, Default)]
pub struct RunLocks {
    inner: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl RunLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and acquires the run lock for `collection_id`.
    ///
    /// Lock entries are created on first use and kept for the registry's
    /// lifetime; the registry is expected to see a bounded set of collection
    /// ids.
    pub async fn acquire(&self, collection_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            Arc::clone(map.entry(collection_id.to_owned()).or_default())
        };
        lock.lock_owned().await
    }
}
