//! Token minting helpers shared by unit and integration tests.
//!
//! Depends only on external crates so `tests/common` can include it.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use p521::ecdsa::{signature::Signer, Signature, SigningKey, VerifyingKey};
use p521::pkcs8::{EncodePublicKey, LineEnding};
use rand::rngs::OsRng;
use serde_json::{json, Value};

/// A freshly generated P-521 key pair.
pub struct TestKeys {
    signing_key: SigningKey,
    /// Canonical SPKI PEM of the public half
    pub pem: String,
}

impl TestKeys {
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut OsRng);
        let verifying_key = VerifyingKey::from(&signing_key);
        let public_key = p521::PublicKey::from_affine(*verifying_key.as_affine())
            .expect("valid public key");
        let pem = public_key
            .to_public_key_pem(LineEnding::LF)
            .expect("pem encoding");

        Self { signing_key, pem }
    }

    /// The public key in the line-stripped form used by configuration.
    pub fn condensed_pem(&self) -> String {
        self.pem.replace('\n', "")
    }

    pub fn sign(&self, claims: Value) -> String {
        self.sign_with_header(json!({ "alg": "ES512", "typ": "JWT" }), claims)
    }

    pub fn sign_with_header(&self, header: Value, claims: Value) -> String {
        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header.to_string()),
            URL_SAFE_NO_PAD.encode(claims.to_string())
        );
        let signature: Signature = self.signing_key.sign(signing_input.as_bytes());
        format!(
            "{}.{}",
            signing_input,
            URL_SAFE_NO_PAD.encode(signature.to_bytes())
        )
    }
}
