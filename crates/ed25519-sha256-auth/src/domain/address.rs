//! # Implicit Addresses
//!
//! An implicit address is the lowercase hex encoding of the raw public key.
//! No prefix, no checksum. The key is not checked to be a valid curve point,
//! only its length.

use super::entities::{ADDRESS_LENGTH, PUBLIC_KEY_LENGTH};
use super::errors::{AddressError, AuthError};

/// Derive the implicit address of an ed25519 public key.
pub fn derive_address(public_key: &[u8]) -> Result<String, AuthError> {
    if public_key.len() != PUBLIC_KEY_LENGTH {
        return Err(AuthError::InvalidKeySize {
            actual: public_key.len(),
        });
    }

    Ok(hex::encode(public_key))
}

/// Recover the public key bytes from an implicit address.
///
/// Only the canonical lowercase form is accepted, so each key has exactly one
/// address.
pub fn public_key_from_address(address: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], AddressError> {
    if address.len() != ADDRESS_LENGTH {
        return Err(AddressError::InvalidLength {
            expected: ADDRESS_LENGTH,
            actual: address.len(),
        });
    }

    if !address.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return Err(AddressError::NotLowercaseHex);
    }

    let mut key = [0u8; PUBLIC_KEY_LENGTH];
    hex::decode_to_slice(address, &mut key).map_err(|_| AddressError::NotLowercaseHex)?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_key_address() {
        let address = derive_address(&[0u8; 32]).unwrap();
        assert_eq!(address, "0".repeat(64));
    }

    #[test]
    fn test_address_is_lowercase_hex() {
        let key: Vec<u8> = (0u8..32).map(|i| i.wrapping_mul(37) | 0xA0).collect();
        let address = derive_address(&key).unwrap();

        assert_eq!(address.len(), ADDRESS_LENGTH);
        assert!(address.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_eq!(public_key_from_address(&address).unwrap().to_vec(), key);
    }

    #[test]
    fn test_wrong_key_size_reports_length() {
        assert_eq!(
            derive_address(&[1u8; 31]),
            Err(AuthError::InvalidKeySize { actual: 31 })
        );
        assert_eq!(
            derive_address(&[]),
            Err(AuthError::InvalidKeySize { actual: 0 })
        );
        assert_eq!(
            derive_address(&[1u8; 33]),
            Err(AuthError::InvalidKeySize { actual: 33 })
        );
    }

    #[test]
    fn test_decode_rejects_uppercase() {
        let address = "AB".repeat(32);
        assert_eq!(
            public_key_from_address(&address),
            Err(AddressError::NotLowercaseHex)
        );
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        let address = format!("{}zz", "0".repeat(62));
        assert_eq!(
            public_key_from_address(&address),
            Err(AddressError::NotLowercaseHex)
        );
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert_eq!(
            public_key_from_address("abcd"),
            Err(AddressError::InvalidLength {
                expected: 64,
                actual: 4
            })
        );
    }
}
