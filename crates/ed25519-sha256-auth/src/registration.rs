//! # Scheme Registration
//!
//! Explicit startup calls that put the authenticators into a host registry.
//! Nothing registers itself on load; the host startup sequence calls these
//! before it begins serving verification requests.
//!
//! A returned error is fatal for the host: continuing would leave a whole
//! signature scheme unverifiable with no error at the point of use.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::{ED25519_SCHEME, ED25519_SHA256_SCHEME};
use crate::ports::inbound::Authenticator;
use crate::ports::outbound::{AuthenticatorRegistry, RegistryError};
use crate::service::{Ed25519Authenticator, Ed25519Sha256Authenticator};

fn register_scheme<R: AuthenticatorRegistry + ?Sized>(
    registry: &R,
    name: &str,
    authenticator: Arc<dyn Authenticator>,
) -> Result<(), RegistryError> {
    match registry.register(name, authenticator) {
        Ok(()) => {
            info!(scheme = %name, "Authentication scheme available");
            Ok(())
        }
        Err(e) => {
            error!(scheme = %name, error = %e, "Failed to register authentication scheme");
            Err(e)
        }
    }
}

/// Register the `ed25519_nr_jc` (sha256 + ed25519) authenticator.
pub fn register_ed25519_sha256_scheme<R: AuthenticatorRegistry + ?Sized>(
    registry: &R,
) -> Result<(), RegistryError> {
    register_scheme(
        registry,
        ED25519_SHA256_SCHEME,
        Arc::new(Ed25519Sha256Authenticator::new()),
    )
}

/// Register the plain `ed25519` authenticator.
pub fn register_ed25519_scheme<R: AuthenticatorRegistry + ?Sized>(
    registry: &R,
) -> Result<(), RegistryError> {
    register_scheme(registry, ED25519_SCHEME, Arc::new(Ed25519Authenticator::new()))
}

/// Register every scheme this crate provides, stopping at the first failure.
pub fn register_default_schemes<R: AuthenticatorRegistry + ?Sized>(
    registry: &R,
) -> Result<(), RegistryError> {
    register_ed25519_sha256_scheme(registry)?;
    register_ed25519_scheme(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::InMemoryAuthenticatorRegistry;
    use crate::domain::config::RegistryConfig;

    #[test]
    fn test_register_into_fresh_registry() {
        let registry = InMemoryAuthenticatorRegistry::new();

        register_ed25519_sha256_scheme(&registry).unwrap();

        assert_eq!(registry.schemes(), vec![ED25519_SHA256_SCHEME]);
    }

    #[test]
    fn test_second_registration_fails() {
        let registry = InMemoryAuthenticatorRegistry::new();
        register_ed25519_sha256_scheme(&registry).unwrap();

        assert_eq!(
            register_ed25519_sha256_scheme(&registry),
            Err(RegistryError::DuplicateScheme(
                ED25519_SHA256_SCHEME.to_string()
            ))
        );
    }

    #[test]
    fn test_default_schemes() {
        let registry = InMemoryAuthenticatorRegistry::new();

        register_default_schemes(&registry).unwrap();

        assert_eq!(
            registry.schemes(),
            vec![ED25519_SCHEME, ED25519_SHA256_SCHEME]
        );
    }

    #[test]
    fn test_default_schemes_stop_at_first_failure() {
        let config = RegistryConfig::default().with_max_schemes(1);
        let registry = InMemoryAuthenticatorRegistry::with_config(config).unwrap();

        assert_eq!(
            register_default_schemes(&registry),
            Err(RegistryError::RegistryFull { max: 1 })
        );
        assert!(registry.contains(ED25519_SHA256_SCHEME));
        assert!(!registry.contains(ED25519_SCHEME));
    }
}
