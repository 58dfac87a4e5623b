//! # Domain Entities
//!
//! Sizes, scheme identifiers and the request/result types shared by the
//! authenticators.

/// Ed25519 public key size in bytes.
pub const PUBLIC_KEY_LENGTH: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;

/// Ed25519 signature size in bytes.
pub const SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// Length of a derived address in characters (two hex digits per key byte).
pub const ADDRESS_LENGTH: usize = PUBLIC_KEY_LENGTH * 2;

/// Scheme identifier of the sha256-then-ed25519 authenticator.
///
/// The `nr` suffix keeps compatibility with the NEAR-style naming already
/// persisted in signed payload metadata. Must never change.
pub const ED25519_SHA256_SCHEME: &str = "ed25519_nr_jc";

/// Scheme identifier of the plain ed25519 authenticator.
pub const ED25519_SCHEME: &str = "ed25519";

/// A single verification job for batch processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationRequest {
    /// Signer's public key
    pub public_key: Vec<u8>,
    /// The bytes that were signed (before hashing)
    pub message: Vec<u8>,
    /// The signature to check
    pub signature: Vec<u8>,
}

impl VerificationRequest {
    /// Create a request from borrowed slices.
    pub fn new(public_key: &[u8], message: &[u8], signature: &[u8]) -> Self {
        Self {
            public_key: public_key.to_vec(),
            message: message.to_vec(),
            signature: signature.to_vec(),
        }
    }
}

/// Result of batch verification.
#[derive(Clone, Debug)]
pub struct BatchVerificationResult {
    /// Individual results, in request order
    pub results: Vec<Result<(), super::errors::AuthError>>,
    /// Whether all verifications passed
    pub all_valid: bool,
    /// Count of valid signatures
    pub valid_count: usize,
    /// Count of invalid signatures
    pub invalid_count: usize,
}

impl BatchVerificationResult {
    /// Create a batch result from individual results.
    pub fn from_results(results: Vec<Result<(), super::errors::AuthError>>) -> Self {
        let valid_count = results.iter().filter(|r| r.is_ok()).count();
        let invalid_count = results.len() - valid_count;
        let all_valid = invalid_count == 0;

        Self {
            results,
            all_valid,
            valid_count,
            invalid_count,
        }
    }
}
