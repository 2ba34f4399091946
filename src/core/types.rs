/*!
 * Core Types
 * Common types used across the cache
 */

/// Key type accepted by the cache
pub type Key = i64;

/// Value type stored in the cache
pub type Value = i64;

/// Index of a shard within a cache
pub type ShardId = usize;

/// Common result type for cache operations
pub type CacheResult<T> = Result<T, super::errors::CacheError>;
