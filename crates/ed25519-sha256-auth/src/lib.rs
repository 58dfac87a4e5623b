//! # Ed25519-SHA256 Authenticator
//!
//! Pluggable authentication scheme for a host signature-verification
//! framework. The `ed25519_nr_jc` scheme verifies ed25519 signatures over the
//! sha256 digest of a message and derives NEAR-style implicit addresses
//! (lowercase hex of the public key).
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): sizes, addresses, hashing, errors, config
//! - **Ports Layer** (`ports/`): the `Authenticator` capability, the raw
//!   signature primitive and the host registry
//! - **Adapters Layer** (`adapters/`): `ed25519-dalek` primitive and an
//!   in-memory registry
//! - **Service Layer** (`service.rs`): the authenticators themselves
//! - **Registration** (`registration.rs`): explicit startup registration
//!
//! ## Usage
//!
//! ```
//! use ed25519_sha256_auth::{
//!     register_ed25519_sha256_scheme, InMemoryAuthenticatorRegistry, ED25519_SHA256_SCHEME,
//! };
//!
//! let registry = InMemoryAuthenticatorRegistry::new();
//! register_ed25519_sha256_scheme(&registry).expect("startup registration");
//!
//! let address = registry.address(ED25519_SHA256_SCHEME, &[0u8; 32]).unwrap();
//! assert_eq!(address, "0".repeat(64));
//! ```
//!
//! ## Security Notes
//!
//! - The digest step is part of the scheme. Never verify over the raw message.
//! - Signature length is checked before any cryptographic work.
//! - Verification failures carry no detail beyond "invalid signature".

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod registration;
pub mod service;

// Re-export public API
pub use adapters::{DispatchError, Ed25519Primitive, InMemoryAuthenticatorRegistry};
pub use domain::address::{derive_address, public_key_from_address};
pub use domain::config::RegistryConfig;
pub use domain::digest::sha256;
pub use domain::entities::{
    BatchVerificationResult, VerificationRequest, ADDRESS_LENGTH, ED25519_SCHEME,
    ED25519_SHA256_SCHEME, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH,
};
pub use domain::errors::{AddressError, AuthError, ConfigError};
pub use ports::inbound::Authenticator;
pub use ports::outbound::{AuthenticatorRegistry, RegistryError, SignaturePrimitive};
pub use registration::{
    register_default_schemes, register_ed25519_scheme, register_ed25519_sha256_scheme,
};
pub use service::{verify_batch, Ed25519Authenticator, Ed25519Sha256Authenticator};
