//! Configuration Module
//!
//! Handles loading resolver configuration from environment variables.

use std::env;

/// Default entry lifetime: 30 days in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30 * 24 * 60 * 60 * 1000;

/// Default maximum number of cached tokens.
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// Resolver configuration parameters.
///
/// All values can be configured via environment variables. Only the
/// public key has no default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Condensed PEM public key used to verify session tokens
    pub public_key: Option<String>,
    /// Cache entry lifetime in milliseconds
    pub timeout_ms: u64,
    /// Maximum number of entries the cache can hold (0 = unbounded)
    pub max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `JWT_PUB_KEY` - Condensed PEM public key (no default)
    /// - `SESSION_CACHE_TIMEOUT_MS` - Entry lifetime in ms (default: 30 days)
    /// - `SESSION_CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            public_key: env::var("JWT_PUB_KEY").ok().filter(|v| !v.is_empty()),
            timeout_ms: env::var("SESSION_CACHE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
            max_entries: env::var("SESSION_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ENTRIES),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_entries: DEFAULT_MAX_ENTRIES,
            server_port: 3000,
        }
    }
}
