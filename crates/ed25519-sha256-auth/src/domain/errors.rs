//! # Authentication Errors
//!
//! Error types for address derivation and signature verification.

use thiserror::Error;

/// Errors returned by an authenticator.
///
/// Every variant is terminal: the caller rejects the input, nothing is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The public key does not have the ed25519 public key size.
    #[error("invalid ed25519 public key size: {actual}")]
    InvalidKeySize { actual: usize },

    /// The signature does not have the ed25519 signature size.
    #[error("ed25519: invalid signature length: expected: {expected}, got: {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    /// Cryptographic verification failed.
    ///
    /// Carries no detail on purpose; callers only learn that the signature
    /// did not verify.
    #[error("invalid signature")]
    InvalidSignature,
}

/// Errors from decoding an address back into a public key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Address is not exactly twice the public key length.
    #[error("invalid address length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Address contains a character outside `[0-9a-f]`.
    #[error("address is not lowercase hex")]
    NotLowercaseHex,
}

/// Errors from building or validating a `RegistryConfig`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_schemes` must allow at least one scheme
    #[error("max_schemes cannot be 0")]
    ZeroCapacity,

    /// `max_name_len` is outside the supported range
    #[error("max_name_len must be between 1 and {max}, got {actual}")]
    InvalidNameLength { actual: usize, max: usize },
}
