//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: the `Authenticator` capability the host calls
//! - **Outbound (Driven)**: the signature primitive and the host registry

pub mod inbound;
pub mod outbound;
