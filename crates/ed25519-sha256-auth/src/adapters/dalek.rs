//! # Ed25519 Primitive (ed25519-dalek)
//!
//! Driven adapter implementing `SignaturePrimitive` with `ed25519-dalek`.
//!
//! Uses the cofactorless `verify`, not `verify_strict`, so that keys and
//! signatures accepted by other standard ed25519 verifiers are accepted here.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::domain::entities::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use crate::domain::errors::AuthError;
use crate::ports::outbound::SignaturePrimitive;

/// Ed25519 verification backed by `ed25519-dalek`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Primitive;

impl Ed25519Primitive {
    /// Create a new primitive.
    pub fn new() -> Self {
        Self
    }
}

impl SignaturePrimitive for Ed25519Primitive {
    fn verify_raw(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8; SIGNATURE_LENGTH],
    ) -> Result<(), AuthError> {
        let key_bytes: &[u8; PUBLIC_KEY_LENGTH] = public_key
            .try_into()
            .map_err(|_| AuthError::InvalidKeySize {
                actual: public_key.len(),
            })?;

        // A key that does not decode to a curve point simply cannot verify.
        let verifying_key =
            VerifyingKey::from_bytes(key_bytes).map_err(|_| AuthError::InvalidSignature)?;

        let signature = Signature::from_bytes(signature);

        verifying_key
            .verify(message, &signature)
            .map_err(|_| AuthError::InvalidSignature)
    }
}
