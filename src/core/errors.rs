/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cache errors with serialization support
///
/// Construction is the only fallible path: every per-key operation is
/// total over the full key/value domain.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CacheError {
    #[error("Invalid configuration: shard count must be at least 1, got {shard_count}")]
    #[diagnostic(
        code(shardcache::invalid_configuration),
        help("Construct the cache with a shard count of 1 or more.")
    )]
    InvalidConfiguration { shard_count: usize },
}
