//! # Inbound Ports (Driving Ports / API)
//!
//! The capability the host framework calls into.

use crate::domain::errors::AuthError;

/// An authentication scheme: address derivation plus signature verification.
///
/// The host treats every implementation as interchangeable and selects one by
/// scheme identifier. Implementations must be stateless with respect to calls
/// and thread-safe (`Send + Sync`).
pub trait Authenticator: Send + Sync {
    /// Derive the account address for a public key.
    fn address(&self, public_key: &[u8]) -> Result<String, AuthError>;

    /// Verify `signature` over `message` for `public_key`.
    ///
    /// `Ok(())` means the signature is valid.
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8])
        -> Result<(), AuthError>;
}
