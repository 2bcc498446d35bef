//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::{BTreeMap, HashMap};

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Every touch stamps the key with a monotonically increasing tick.
/// `order` maps tick to key, so the first entry is always the least
/// recently used one and touch/evict stay logarithmic even at tens of
/// thousands of tracked tokens.
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Key to its latest tick
    ticks: HashMap<String, u64>,
    /// Tick to key, oldest first
    order: BTreeMap<u64, String>,
    /// Next tick to hand out
    next_tick: u64,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used.
    pub fn touch(&mut self, key: &str) {
        let tick = self.next_tick;
        self.next_tick += 1;

        match self.ticks.get_mut(key) {
            Some(previous) => {
                if let Some(k) = self.order.remove(previous) {
                    self.order.insert(tick, k);
                }
                *previous = tick;
            }
            None => {
                self.ticks.insert(key.to_string(), tick);
                self.order.insert(tick, key.to_string());
            }
        }
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        if let Some(tick) = self.ticks.remove(key) {
            self.order.remove(&tick);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.ticks.remove(&key);
        Some(key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.ticks.contains_key(key)
    }
}
