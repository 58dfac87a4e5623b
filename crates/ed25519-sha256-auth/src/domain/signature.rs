//! # Signature Shape Checks
//!
//! Runs before any cryptographic work.

use super::entities::SIGNATURE_LENGTH;
use super::errors::AuthError;

/// Borrow the signature as a fixed-size array, or report the length mismatch.
pub fn signature_bytes(signature: &[u8]) -> Result<&[u8; SIGNATURE_LENGTH], AuthError> {
    signature
        .try_into()
        .map_err(|_| AuthError::InvalidSignatureLength {
            expected: SIGNATURE_LENGTH,
            actual: signature.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length_accepted() {
        let sig = [7u8; 64];
        assert_eq!(signature_bytes(&sig).unwrap(), &sig);
    }

    #[test]
    fn test_length_mismatch_reports_both_lengths() {
        assert_eq!(
            signature_bytes(&[0u8; 63]),
            Err(AuthError::InvalidSignatureLength {
                expected: 64,
                actual: 63
            })
        );
        assert_eq!(
            signature_bytes(&[0u8; 65]),
            Err(AuthError::InvalidSignatureLength {
                expected: 64,
                actual: 65
            })
        );
    }
}
