//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies the authenticators need: the raw signature primitive and the
//! host's authenticator registry.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::entities::SIGNATURE_LENGTH;
use crate::domain::errors::AuthError;
use crate::ports::inbound::Authenticator;

/// Raw signature verification over already-prepared bytes.
///
/// Receives the exact bytes the signature covers (for `ed25519_nr_jc`, the
/// sha256 digest) and a signature whose length was already checked.
pub trait SignaturePrimitive: Send + Sync {
    /// Verify `signature` over `message`.
    ///
    /// # Errors
    /// * `AuthError::InvalidKeySize` - public key has the wrong length
    /// * `AuthError::InvalidSignature` - anything else
    fn verify_raw(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8; SIGNATURE_LENGTH],
    ) -> Result<(), AuthError>;
}

/// Error from registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A scheme with this name is already registered
    #[error("authenticator already registered: {0}")]
    DuplicateScheme(String),

    /// The scheme name does not satisfy the registry's naming rules
    #[error("invalid scheme name {name:?}: {reason}")]
    InvalidSchemeName { name: String, reason: String },

    /// The registry cannot hold more schemes
    #[error("registry is full: {max} schemes")]
    RegistryFull { max: usize },

    /// No authenticator is registered under this name
    #[error("unknown authenticator: {0}")]
    UnknownScheme(String),
}

/// The host's authenticator registry.
///
/// Maps scheme identifiers to authenticators. Registration happens during
/// single-threaded startup; lookups happen afterwards from any thread.
pub trait AuthenticatorRegistry: Send + Sync {
    /// Register `authenticator` under `name`.
    ///
    /// # Errors
    /// * `RegistryError::DuplicateScheme` - `name` is taken
    /// * `RegistryError::InvalidSchemeName` - `name` is rejected by the registry
    /// * `RegistryError::RegistryFull` - no capacity left
    fn register(
        &self,
        name: &str,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<(), RegistryError>;
}
