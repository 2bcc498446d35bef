//! Error types for the session resolver
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Verify Error Enum ==
/// Failures reported while validating a session token.
///
/// These are passed to callers unchanged; nothing in the resolver
/// retries or reinterprets them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Token is not a well-formed compact JWS
    #[error("jwt malformed: {0}")]
    Malformed(String),

    /// Header names an algorithm other than ES512
    #[error("invalid algorithm: {0}")]
    InvalidAlgorithm(String),

    /// Signature does not match the configured public key
    #[error("invalid signature")]
    InvalidSignature,

    /// `exp` claim has passed (Unix seconds)
    #[error("jwt expired at {0}")]
    Expired(i64),

    /// `nbf` claim is still in the future (Unix seconds)
    #[error("jwt not active until {0}")]
    NotBefore(i64),

    /// Payload carries no string `sub` claim
    #[error("jwt has no subject claim")]
    MissingSubject,

    /// Public key material could not be parsed
    #[error("invalid public key: {0}")]
    InvalidKey(String),
}

// == Session Error Enum ==
/// Unified error type for session resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Token argument absent or empty
    #[error("sessionToken is missing")]
    MissingToken,

    /// Token failed cryptographic or claim validation
    #[error(transparent)]
    Verification(#[from] VerifyError),

    /// Startup configuration problem
    #[error("Configuration error: {0}")]
    Config(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = match &self {
            SessionError::MissingToken => StatusCode::BAD_REQUEST,
            SessionError::Verification(_) => StatusCode::UNAUTHORIZED,
            SessionError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the session resolver.
pub type Result<T> = std::result::Result<T, SessionError>;
