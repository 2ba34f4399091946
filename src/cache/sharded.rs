/*!
 * Sharded Cache
 * Partitions keys across independently locked shards to reduce contention
 */

use super::config::CacheConfig;
use super::shard::Shard;
use crate::core::types::{CacheResult, Key, ShardId, Value};
use log::info;

/// Concurrent key-value cache partitioned across a fixed set of shards.
///
/// Instead of one global lock, the key space is split across N shards,
/// each guarded by its own reader-writer lock. Every operation touches
/// exactly one shard and holds at most one shard lock at a time, so
/// deadlock across shards is impossible and operations on keys routed to
/// different shards proceed fully in parallel. Same-shard writers
/// serialize through that shard's lock; same-shard readers may overlap.
///
/// # Routing
///
/// `key.rem_euclid(shard_count)`: a pure function of the key and the
/// fixed shard count, always in `[0, N)` including for negative keys.
/// A given key therefore routes to the same shard for the cache's entire
/// lifetime, which is what keeps a key's insert/remove/lookup history on
/// a single shard's map.
///
/// # Example
///
/// ```
/// use shardcache::ShardedCache;
///
/// let cache = ShardedCache::new(4).unwrap();
/// cache.insert(10, 100);
/// cache.insert(7, 70);
/// assert_eq!(cache.lookup(10), Some(100));
/// cache.remove(10);
/// assert_eq!(cache.lookup(10), None);
/// ```
#[derive(Debug)]
pub struct ShardedCache {
    shards: Vec<Shard>,
    shard_count: usize,
}

impl ShardedCache {
    /// Create a cache with the given number of shards
    ///
    /// Fails with [`CacheError::InvalidConfiguration`] if `shard_count`
    /// is zero.
    ///
    /// [`CacheError::InvalidConfiguration`]: crate::CacheError::InvalidConfiguration
    pub fn new(shard_count: usize) -> CacheResult<Self> {
        Self::with_config(CacheConfig::with_shards(shard_count))
    }

    /// Create a cache from a validated configuration
    pub fn with_config(config: CacheConfig) -> CacheResult<Self> {
        config.validate()?;
        let shard_count = config.shard_count;

        let mut shards = Vec::with_capacity(shard_count);
        for _ in 0..shard_count {
            shards.push(Shard::new());
        }

        info!("Sharded cache initialized with {} shards", shard_count);
        Ok(Self {
            shards,
            shard_count,
        })
    }

    /// Shard index for a key
    ///
    /// Euclidean remainder keeps negative keys in `[0, shard_count)`.
    /// Depends on nothing but the key and the immutable shard count.
    #[inline]
    fn shard_index(&self, key: Key) -> ShardId {
        key.rem_euclid(self.shard_count as i64) as ShardId
    }

    #[inline]
    fn shard_for(&self, key: Key) -> &Shard {
        &self.shards[self.shard_index(key)]
    }

    /// Insert a key-value pair, overwriting any previous value
    pub fn insert(&self, key: Key, value: Value) {
        self.shard_for(key).insert(key, value);
    }

    /// Remove a key; removing an absent key is a no-op
    pub fn remove(&self, key: Key) {
        self.shard_for(key).remove(key);
    }

    /// Look up a key, taking only the owning shard's read lock
    ///
    /// Returns `None` on a miss; a miss is a normal outcome, not an error.
    pub fn lookup(&self, key: Key) -> Option<Value> {
        self.shard_for(key).lookup(key)
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: Key) -> bool {
        self.shard_for(key).contains_key(key)
    }

    /// Total number of entries across all shards
    ///
    /// Locks shards one at a time, so the result is not an atomic
    /// snapshot under concurrent mutation.
    pub fn len(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    /// True if no shard holds any entry
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(Shard::is_empty)
    }

    /// Drop all entries from every shard
    pub fn clear(&self) {
        for shard in &self.shards {
            shard.clear();
        }
    }

    /// Visit every entry, holding one shard's read lock at a time
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Key, Value),
    {
        for shard in &self.shards {
            shard.for_each(&mut f);
        }
    }

    /// Number of shards the cache was constructed with
    pub fn shard_count(&self) -> usize {
        self.shard_count
    }
}
