//! Cache Module
//!
//! Bounded memo of verified session tokens with lazy expiry and LRU
//! eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::IdentityCache;
