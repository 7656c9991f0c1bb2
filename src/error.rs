//! Error types for the timed cache.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use chrono::TimeDelta;
use thiserror::Error;

/// Errors returned by cache operations.
///
/// None of these are fatal to the cache; the instance stays usable after any of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A negative TTL was passed to `set`
    #[error("ttl must be >= 0, got {0}")]
    InvalidTtl(TimeDelta),

    /// No entry exists for the key
    #[error("key not found: {0}")]
    NotFound(String),

    /// The entry existed but its deadline has passed
    #[error("key expired: {0}")]
    Expired(String),
}

impl CacheError {
    /// True for both "never existed" and "existed but went stale".
    pub fn is_miss(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Expired(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with CacheError
pub type CacheResult<T> = Result<T, CacheError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
