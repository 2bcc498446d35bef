//! Identity Cache Module
//!
//! Token to user id storage combining a HashMap with LRU tracking and
//! lazily checked per-entry timeouts.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Identity Cache ==
/// Bounded, time-limited memo of verified session tokens.
///
/// Expiry is lazy: a stale entry lingers (and counts toward capacity)
/// until the next lookup of its token removes it, or LRU eviction
/// reaches it. There is no background sweep.
#[derive(Debug)]
pub struct IdentityCache {
    /// Token to resolved identity
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Lookup and verification counters
    stats: CacheStats,
    /// Maximum number of entries, 0 = unbounded
    max_entries: usize,
    /// Entry lifetime in milliseconds
    timeout_ms: u64,
}

impl IdentityCache {
    // == Constructor ==
    /// Creates a new IdentityCache.
    ///
    /// # Arguments
    /// * `timeout_ms` - Lifetime of each entry, measured from insertion
    /// * `max_entries` - Capacity bound; 0 disables the bound
    pub fn new(timeout_ms: u64, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            timeout_ms,
        }
    }

    // == Get ==
    /// Looks up the user id cached for `token`.
    ///
    /// A live entry is marked most recently used. An expired entry is
    /// removed and reported as a miss.
    pub fn get(&mut self, token: &str) -> Option<String> {
        let Some(entry) = self.entries.get(token) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired() {
            self.entries.remove(token);
            self.lru.remove(token);
            self.stats.record_expiration();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        let user_id = entry.user_id.clone();
        self.lru.touch(token);
        self.stats.record_hit();
        Some(user_id)
    }

    // == Insert ==
    /// Stores `token -> user_id`, resetting the timeout if the token is
    /// already present.
    ///
    /// Inserting a new token at capacity evicts the least recently used
    /// entry first.
    pub fn insert(&mut self, token: String, user_id: String) {
        let is_overwrite = self.entries.contains_key(&token);

        if !is_overwrite && self.max_entries > 0 && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.entries
            .insert(token.clone(), CacheEntry::new(user_id, self.timeout_ms));
        self.lru.touch(&token);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Contains ==
    /// Returns true if a live entry exists for `token`.
    ///
    /// Unlike [`get`](Self::get) this neither refreshes LRU order nor
    /// counts as a lookup.
    pub fn contains(&self, token: &str) -> bool {
        self.entries
            .get(token)
            .is_some_and(|entry| !entry.is_expired())
    }

    // == Record Verification ==
    pub fn record_verification(&mut self, succeeded: bool) {
        self.stats.record_verification(succeeded);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Accessors ==
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Returns the number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
