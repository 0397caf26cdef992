//! Atomic snapshot publication for concurrent readers.
//!
//! Reload cycles (file-watch events, editor refreshes) build a brand-new
//! [`RuleIndex`] off to the side and swap it in with [`SnapshotCell::publish`].
//! Readers call [`SnapshotCell::load`] once, then resolve against their
//! `Arc` with no locking at all — the index is immutable. An old snapshot
//! keeps serving in-flight lookups until its last `Arc` drops, so a reload
//! never disturbs a reader mid-resolution.

use std::sync::{Arc, RwLock};

use crate::index::RuleIndex;

/// Shared cell holding the currently published index snapshot.
///
/// `Send + Sync`; the only lock is held for the duration of an `Arc` clone
/// or swap.
#[derive(Debug)]
pub struct SnapshotCell {
    current: RwLock<Arc<RuleIndex>>,
}

impl SnapshotCell {
    pub fn new(index: RuleIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// Grab the current snapshot. Resolve against the returned `Arc`; do
    /// not call `load` per lookup if a batch should see one consistent
    /// corpus.
    pub fn load(&self) -> Arc<RuleIndex> {
        self.current.read().unwrap().clone()
    }

    /// Swap in a fully-built replacement index and return it.
    pub fn publish(&self, index: RuleIndex) -> Arc<RuleIndex> {
        let fresh = Arc::new(index);
        *self.current.write().unwrap() = Arc::clone(&fresh);
        fresh
    }
}
