//! Token Verifier
//!
//! Validates ES512-signed compact JWS session tokens and extracts the
//! subject claim as the user id. This is the only place that performs
//! cryptographic validation.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use p521::ecdsa::{signature::Verifier, Signature, VerifyingKey};
use p521::pkcs8::DecodePublicKey;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::auth::format_key;
use crate::error::{Result, SessionError, VerifyError};

/// The only accepted `alg` header value.
pub const ALGORITHM: &str = "ES512";

// == Verified Identity ==
/// Outcome of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Subject claim of the token
    pub id: String,
    /// The token that was verified
    pub session_token: String,
}

// == Token Verifier Trait ==
/// Turns a session token into a trusted identity.
///
/// Implementations must be side-effect free so that redundant calls for
/// the same token are harmless.
pub trait TokenVerifier: Send + Sync {
    /// Verifies `session_token`.
    ///
    /// # Errors
    /// - [`SessionError::MissingToken`] when the token is empty
    /// - [`SessionError::Verification`] for any signature, claim or format failure
    fn verify(&self, session_token: &str) -> Result<VerifiedIdentity>;
}

#[derive(Debug, Deserialize)]
struct JwsHeader {
    alg: String,
}

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    sub: Option<serde_json::Value>,
    #[serde(default)]
    exp: Option<f64>,
    #[serde(default)]
    nbf: Option<f64>,
}

// == ES512 Verifier ==
/// Verifies tokens against a single P-521 public key.
///
/// The key is parsed once at construction and reused for every call.
#[derive(Clone)]
pub struct Es512Verifier {
    key: VerifyingKey,
}

impl Es512Verifier {
    /// Builds a verifier from the condensed key form used in configuration.
    pub fn from_condensed_pem(condensed: &str) -> std::result::Result<Self, VerifyError> {
        Self::from_pem(&format_key(condensed))
    }

    /// Builds a verifier from a canonical SPKI PEM public key.
    pub fn from_pem(pem: &str) -> std::result::Result<Self, VerifyError> {
        let public_key = p521::PublicKey::from_public_key_pem(pem)
            .map_err(|e| VerifyError::InvalidKey(e.to_string()))?;
        let key = VerifyingKey::from_affine(*public_key.as_affine())
            .map_err(|e| VerifyError::InvalidKey(e.to_string()))?;
        Ok(Self { key })
    }

    // == Verify Token ==
    /// Checks structure, algorithm, signature and time claims, in that order.
    fn verify_token(&self, token: &str) -> std::result::Result<String, VerifyError> {
        let mut segments = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(VerifyError::Malformed(
                "expected three dot-separated segments".to_string(),
            ));
        };

        let header: JwsHeader = decode_segment(header_b64, "header")?;
        if header.alg != ALGORITHM {
            return Err(VerifyError::InvalidAlgorithm(header.alg));
        }

        let signature_bytes = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|e| VerifyError::Malformed(format!("signature: {e}")))?;
        let signature =
            Signature::from_slice(&signature_bytes).map_err(|_| VerifyError::InvalidSignature)?;

        // Signing input is the encoded header and payload exactly as received
        let signing_input_len = header_b64.len() + 1 + payload_b64.len();
        self.key
            .verify(&token.as_bytes()[..signing_input_len], &signature)
            .map_err(|_| VerifyError::InvalidSignature)?;

        let claims: Claims = decode_segment(payload_b64, "payload")?;
        // NumericDate claims may be fractional; compare against whole seconds
        let now = chrono::Utc::now().timestamp() as f64;

        if let Some(nbf) = claims.nbf {
            if nbf > now {
                return Err(VerifyError::NotBefore(nbf.floor() as i64));
            }
        }
        if let Some(exp) = claims.exp {
            if now >= exp {
                return Err(VerifyError::Expired(exp.floor() as i64));
            }
        }

        match claims.sub {
            Some(serde_json::Value::String(sub)) if !sub.is_empty() => Ok(sub),
            _ => Err(VerifyError::MissingSubject),
        }
    }
}

impl TokenVerifier for Es512Verifier {
    fn verify(&self, session_token: &str) -> Result<VerifiedIdentity> {
        if session_token.is_empty() {
            return Err(SessionError::MissingToken);
        }

        let id = self.verify_token(session_token)?;
        Ok(VerifiedIdentity {
            id,
            session_token: session_token.to_string(),
        })
    }
}

/// Decodes one base64url JSON segment of a compact JWS.
fn decode_segment<T: DeserializeOwned>(
    segment: &str,
    name: &str,
) -> std::result::Result<T, VerifyError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| VerifyError::Malformed(format!("{name}: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| VerifyError::Malformed(format!("{name}: {e}")))
}
