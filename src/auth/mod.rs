//! Auth Module
//!
//! Public key formatting and ES512 session token verification.

mod key;
mod verifier;

#[cfg(test)]
pub(crate) mod test_support;

pub use key::{format_key, PEM_FOOTER, PEM_HEADER, PEM_LINE_WIDTH};
pub use verifier::{Es512Verifier, TokenVerifier, VerifiedIdentity, ALGORITHM};

#[cfg(test)]
impl test_support::TestKeys {
    pub(crate) fn verifier(&self) -> Es512Verifier {
        Es512Verifier::from_condensed_pem(&self.condensed_pem()).expect("test key parses")
    }
}
