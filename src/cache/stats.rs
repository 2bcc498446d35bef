//! Cache Statistics Module
//!
//! Tracks lookup and verification counters for the session cache.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing how session tokens were resolved.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that found no live entry
    pub misses: u64,
    /// Entries evicted due to LRU policy
    pub evictions: u64,
    /// Entries dropped because their timeout elapsed
    pub expirations: u64,
    /// Verifier invocations
    pub verifications: u64,
    /// Verifier invocations that returned an error
    pub verification_failures: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was looked up yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    // == Record Verification ==
    /// Counts one verifier call and whether it succeeded.
    pub fn record_verification(&mut self, succeeded: bool) {
        self.verifications += 1;
        if !succeeded {
            self.verification_failures += 1;
        }
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
