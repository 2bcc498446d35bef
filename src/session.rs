//! Session Token Cache
//!
//! Resolves session tokens to user ids, consulting the identity cache
//! before falling back to cryptographic verification.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::auth::TokenVerifier;
use crate::cache::{CacheStats, IdentityCache};
use crate::config::{Config, DEFAULT_MAX_ENTRIES, DEFAULT_TIMEOUT_MS};
use crate::error::{Result, SessionError};

// == Session Token Cache ==
/// Memoizing front for a [`TokenVerifier`].
///
/// Cloning is cheap and clones share the same cache. The cache lock is
/// only held for in-memory reads and writes, never across verification,
/// so two concurrent misses on one token both verify and the later
/// insert wins.
#[derive(Clone)]
pub struct SessionTokenCache {
    cache: Arc<RwLock<IdentityCache>>,
    verifier: Arc<dyn TokenVerifier>,
}

impl SessionTokenCache {
    // == Constructors ==
    /// Creates a resolver with an explicit entry lifetime and capacity.
    ///
    /// # Arguments
    /// * `verifier` - Validates tokens on cache misses
    /// * `timeout_ms` - Entry lifetime in milliseconds
    /// * `max_entries` - Capacity bound; 0 disables the bound
    pub fn new(verifier: Arc<dyn TokenVerifier>, timeout_ms: u64, max_entries: usize) -> Self {
        Self {
            cache: Arc::new(RwLock::new(IdentityCache::new(timeout_ms, max_entries))),
            verifier,
        }
    }

    /// Creates a resolver with a 30 day timeout and 10,000 entries.
    pub fn with_defaults(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self::new(verifier, DEFAULT_TIMEOUT_MS, DEFAULT_MAX_ENTRIES)
    }

    /// Creates a resolver sized from configuration.
    pub fn from_config(verifier: Arc<dyn TokenVerifier>, config: &Config) -> Self {
        Self::new(verifier, config.timeout_ms, config.max_entries)
    }

    // == Get User Id ==
    /// Returns the user id behind `session_token`.
    ///
    /// Served from the cache when a live entry exists. Otherwise the token
    /// is verified and, on success only, cached.
    ///
    /// # Errors
    /// - [`SessionError::MissingToken`] for an empty token, before any lookup
    /// - the verifier's error, unchanged, when verification fails
    pub async fn get_user_id(&self, session_token: &str) -> Result<String> {
        if session_token.is_empty() {
            return Err(SessionError::MissingToken);
        }

        let cached = self.cache.write().await.get(session_token);
        if let Some(user_id) = cached {
            debug!(
                user_id = %user_id,
                token = %fingerprint(session_token),
                "Fetched user id from cache"
            );
            return Ok(user_id);
        }

        match self.verifier.verify(session_token) {
            Ok(identity) => {
                {
                    let mut cache = self.cache.write().await;
                    cache.record_verification(true);
                    cache.insert(session_token.to_string(), identity.id.clone());
                }
                debug!(
                    user_id = %identity.id,
                    token = %fingerprint(session_token),
                    "Fetched user id from verified token"
                );
                Ok(identity.id)
            }
            Err(err) => {
                self.cache.write().await.record_verification(false);
                error!(
                    token = %fingerprint(session_token),
                    error = %err,
                    "Can not fetch user id for session token"
                );
                Err(err)
            }
        }
    }

    // == Introspection ==
    /// Returns true if a live entry exists for `session_token`.
    ///
    /// Does not refresh LRU order or touch the counters.
    pub async fn contains(&self, session_token: &str) -> bool {
        self.cache.read().await.contains(session_token)
    }

    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.cache.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cache.read().await.is_empty()
    }
}

/// Short SHA-256 digest used to correlate log lines without writing the
/// bearer token itself.
pub fn fingerprint(session_token: &str) -> String {
    let digest = Sha256::digest(session_token.as_bytes());
    hex::encode(&digest[..6])
}
