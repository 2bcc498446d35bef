//! Session Resolver - turns signed session tokens into user ids
//!
//! Verifies ES512 session tokens against a configured public key and
//! memoizes the resolved user ids in a bounded cache with lazy expiry
//! and LRU eviction.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use api::AppState;
pub use auth::{Es512Verifier, TokenVerifier, VerifiedIdentity};
pub use config::Config;
pub use error::{Result, SessionError, VerifyError};
pub use session::SessionTokenCache;
