//! # Adapters Layer
//!
//! Implementations of the outbound ports.

pub mod dalek;
pub mod registry;

pub use dalek::Ed25519Primitive;
pub use registry::{DispatchError, InMemoryAuthenticatorRegistry};
