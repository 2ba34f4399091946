/*!
 * Cache Shard
 * Single-lock partition of the key space
 */

use crate::core::types::{Key, Value};
use ahash::RandomState;
use parking_lot::RwLock;
use std::collections::HashMap;

/// One partition of the key space, guarded by its own reader-writer lock.
///
/// The map is only touched through the lock: shared mode for lookups,
/// exclusive mode for mutation. A shard knows nothing about its siblings,
/// so nothing it does can interleave with another shard's critical
/// section.
#[derive(Debug, Default)]
pub(crate) struct Shard {
    entries: RwLock<HashMap<Key, Value, RandomState>>,
}

impl Shard {
    /// Create an empty shard
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::default()),
        }
    }

    /// Insert a key-value pair, overwriting any previous value
    pub(crate) fn insert(&self, key: Key, value: Value) {
        self.entries.write().insert(key, value);
    }

    /// Remove a key; removing an absent key is a no-op
    pub(crate) fn remove(&self, key: Key) {
        self.entries.write().remove(&key);
    }

    /// Look up a key (read lock only)
    pub(crate) fn lookup(&self, key: Key) -> Option<Value> {
        self.entries.read().get(&key).copied()
    }

    /// Check if a key is present
    pub(crate) fn contains_key(&self, key: Key) -> bool {
        self.entries.read().contains_key(&key)
    }

    /// Number of entries held by this shard
    pub(crate) fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True if this shard holds no entries
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop all entries
    pub(crate) fn clear(&self) {
        self.entries.write().clear();
    }

    /// Visit every entry under the read lock
    pub(crate) fn for_each<F>(&self, f: &mut F)
    where
        F: FnMut(Key, Value),
    {
        let guard = self.entries.read();
        for (key, value) in guard.iter() {
            f(*key, *value);
        }
    }
}
