//! # Authenticator Service
//!
//! Application service layer implementing the `Authenticator` port.
//!
//! ## Schemes
//!
//! - `Ed25519Sha256Authenticator` (`ed25519_nr_jc`): the signer signs the
//!   sha256 digest of the message, so verification runs ed25519 over that
//!   digest. This matches the NEAR implicit-account signing convention.
//! - `Ed25519Authenticator` (`ed25519`): plain ed25519 over the raw message.
//!
//! Both derive the same implicit address and share the error taxonomy. Both
//! are generic over the `SignaturePrimitive` so the raw check can be swapped
//! out; production code uses `Ed25519Primitive`.

use crate::adapters::dalek::Ed25519Primitive;
use crate::domain::address::derive_address;
use crate::domain::digest::sha256;
use crate::domain::entities::{BatchVerificationResult, VerificationRequest};
use crate::domain::errors::AuthError;
use crate::domain::signature::signature_bytes;
use crate::ports::inbound::Authenticator;
use crate::ports::outbound::SignaturePrimitive;

/// Check the signature shape, then hand the prepared bytes to the primitive.
///
/// The primitive is never reached with a signature of the wrong length.
fn verify_signature<P: SignaturePrimitive>(
    primitive: &P,
    public_key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<(), AuthError> {
    let signature = signature_bytes(signature)?;
    primitive.verify_raw(public_key, message, signature)
}

// =============================================================================
// ED25519 + SHA-256
// =============================================================================

/// Authenticator that verifies ed25519 signatures over `sha256(message)` and
/// derives NEAR-style implicit addresses.
#[derive(Debug, Clone, Default)]
pub struct Ed25519Sha256Authenticator<P: SignaturePrimitive = Ed25519Primitive> {
    primitive: P,
}

impl Ed25519Sha256Authenticator {
    /// Create an authenticator backed by `ed25519-dalek`.
    pub fn new() -> Self {
        Self {
            primitive: Ed25519Primitive::new(),
        }
    }
}

impl<P: SignaturePrimitive> Ed25519Sha256Authenticator<P> {
    /// Create an authenticator with a custom signature primitive.
    pub fn with_primitive(primitive: P) -> Self {
        Self { primitive }
    }

    /// The underlying signature primitive.
    pub fn primitive(&self) -> &P {
        &self.primitive
    }
}

impl<P: SignaturePrimitive> Authenticator for Ed25519Sha256Authenticator<P> {
    fn address(&self, public_key: &[u8]) -> Result<String, AuthError> {
        derive_address(public_key)
    }

    fn verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), AuthError> {
        let digest = sha256(message);
        verify_signature(&self.primitive, public_key, &digest, signature)
    }
}

// =============================================================================
// PLAIN ED25519
// =============================================================================

/// Authenticator that verifies ed25519 signatures over the raw message.
#[derive(Debug, Clone, Default)]
pub struct Ed25519Authenticator<P: SignaturePrimitive = Ed25519Primitive> {
    primitive: P,
}

impl Ed25519Authenticator {
    /// Create an authenticator backed by `ed25519-dalek`.
    pub fn new() -> Self {
        Self {
            primitive: Ed25519Primitive::new(),
        }
    }
}

impl<P: SignaturePrimitive> Ed25519Authenticator<P> {
    /// Create an authenticator with a custom signature primitive.
    pub fn with_primitive(primitive: P) -> Self {
        Self { primitive }
    }
}

impl<P: SignaturePrimitive> Authenticator for Ed25519Authenticator<P> {
    fn address(&self, public_key: &[u8]) -> Result<String, AuthError> {
        derive_address(public_key)
    }

    fn verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), AuthError> {
        verify_signature(&self.primitive, public_key, message, signature)
    }
}

// =============================================================================
// BATCH VERIFICATION
// =============================================================================

/// Verify many requests in parallel with one authenticator.
///
/// Results keep the order of `requests`; each entry is exactly what
/// `authenticator.verify` returns for that request.
pub fn verify_batch<A: Authenticator + ?Sized>(
    authenticator: &A,
    requests: &[VerificationRequest],
) -> BatchVerificationResult {
    use rayon::prelude::*;

    let results: Vec<Result<(), AuthError>> = requests
        .par_iter()
        .map(|req| authenticator.verify(&req.public_key, &req.message, &req.signature))
        .collect();

    BatchVerificationResult::from_results(results)
}
