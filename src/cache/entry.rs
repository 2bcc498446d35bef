//! Cache Entry Module
//!
//! Defines a resolved identity together with its lifetime metadata.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A user id resolved from a verified session token.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The resolved user id
    pub user_id: String,
    /// Insertion timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry that lives for `timeout_ms` from now.
    pub fn new(user_id: String, timeout_ms: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            user_id,
            created_at: now,
            expires_at: now.saturating_add(timeout_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has outlived its timeout.
    ///
    /// An entry is stale once its age strictly exceeds the timeout, so an
    /// entry read exactly at `expires_at` is still served.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() > self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as zero.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
