//! Request DTOs for the resolver API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for POST /resolve
///
/// A missing `session_token` field deserializes to an empty string so it
/// is rejected the same way as an explicitly empty token.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveRequest {
    /// The session token presented by a client
    #[serde(default)]
    pub session_token: String,
}
