//! Configuration for the timed cache.
//!
//! Defaults work out of the box; `from_env` lets the demo binary (or any embedding
//! application) override them from environment variables or a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a [`TimedCache`](crate::TimedCache).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL applied by `insert` (default: zero, i.e. never expires)
    pub default_ttl: Duration,

    /// Log level for the demo binary (default: "error")
    pub log_level: String,
}

impl CacheConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the TTL used by `insert`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use timed_cache::CacheConfig;
    ///
    /// let config = CacheConfig::new().with_default_ttl(Duration::from_secs(30));
    /// assert_eq!(config.default_ttl, Duration::from_secs(30));
    /// ```
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `TIMED_CACHE_DEFAULT_TTL_SECS`: Default TTL in seconds (default: 0, never expires)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        Self::check_dotenv(dotenvy::dotenv())?;

        let default_ttl_secs = Self::parse_env_u64("TIMED_CACHE_DEFAULT_TTL_SECS", 0)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(CacheConfig {
            default_ttl: Duration::from_secs(default_ttl_secs),
            log_level,
        })
    }

    /// A missing .env file is fine, a malformed or unreadable one is not.
    fn check_dotenv(loaded: dotenvy::Result<PathBuf>) -> ConfigResult<()> {
        match loaded {
            Ok(_) => Ok(()),
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::DotenvError(e.to_string())),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            default_ttl: Duration::ZERO,
            log_level: "error".to_string(),
        }
    }
}
