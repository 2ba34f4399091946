/*!
 * Cache Configuration
 * Shard-count selection and validation
 */

use crate::core::errors::CacheError;
use crate::core::types::CacheResult;
use serde::{Deserialize, Serialize};

/// Shards per CPU under the default profile
///
/// Heavy concurrent access benefits from fine-grained locking, so the
/// default over-provisions shards relative to core count.
const SHARDS_PER_CPU: usize = 4;

/// Clamp bounds for the derived default shard count
///
/// Min avoids degeneration on 1-2 core systems; max caps the memory
/// overhead of per-shard locks on very large machines.
const MIN_SHARDS: usize = 4;
const MAX_SHARDS: usize = 512;

/// Cache configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Number of independent shards the key space is partitioned into.
    /// Fixed for the cache's lifetime; must be at least 1.
    pub shard_count: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            shard_count: default_shard_count(),
        }
    }
}

impl CacheConfig {
    /// Configuration with an explicit shard count
    pub const fn with_shards(shard_count: usize) -> Self {
        Self { shard_count }
    }

    /// Single-shard configuration (one global lock, no partitioning)
    pub const fn unsharded() -> Self {
        Self { shard_count: 1 }
    }

    /// Reject configurations that cannot route keys
    pub fn validate(&self) -> CacheResult<()> {
        if self.shard_count == 0 {
            return Err(CacheError::InvalidConfiguration {
                shard_count: self.shard_count,
            });
        }
        Ok(())
    }
}

/// Calculate a CPU-proportional shard count
///
/// More cores mean more threads contending at once, so the default scales
/// with available parallelism and is clamped to reasonable bounds.
#[inline]
pub fn default_shard_count() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or_else(|_| {
            log::warn!("Failed to detect CPU count, defaulting to 8");
            8
        });
    (cpus * SHARDS_PER_CPU).clamp(MIN_SHARDS, MAX_SHARDS)
}
