//! Fuzz target for ed25519_nr_jc verification and address derivation.
//!
//! Arbitrary keys, messages and signatures must never panic and must only
//! ever produce the three documented errors.
//!
//! ## Running
//!
//! ```bash
//! cd crates/ed25519-sha256-auth
//! cargo +nightly fuzz run fuzz_verify
//! ```

#![no_main]

use ed25519_sha256_auth::{AuthError, Authenticator, Ed25519Sha256Authenticator};
use libfuzzer_sys::fuzz_target;

/// Fuzz input structure for verification.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    public_key: Vec<u8>,
    message: Vec<u8>,
    signature: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let auth = Ed25519Sha256Authenticator::new();

    match auth.address(&input.public_key) {
        Ok(address) => assert_eq!(address.len(), input.public_key.len() * 2),
        Err(e) => assert_eq!(
            e,
            AuthError::InvalidKeySize {
                actual: input.public_key.len()
            }
        ),
    }

    match auth.verify(&input.public_key, &input.message, &input.signature) {
        Ok(()) => {}
        Err(AuthError::InvalidSignatureLength { expected, actual }) => {
            assert_eq!(expected, 64);
            assert_eq!(actual, input.signature.len());
        }
        Err(AuthError::InvalidKeySize { actual }) => {
            assert_eq!(input.signature.len(), 64);
            assert_eq!(actual, input.public_key.len());
        }
        Err(AuthError::InvalidSignature) => assert_eq!(input.signature.len(), 64),
    }
});
