//! # Message Digest
//!
//! The sha256 digest is what the `ed25519_nr_jc` scheme actually signs.

use sha2::{Digest, Sha256};

/// SHA-256 digest size in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// SHA-256 of the message.
pub fn sha256(message: &[u8]) -> [u8; DIGEST_LENGTH] {
    Sha256::digest(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_empty_message() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
