//! # In-Memory Authenticator Registry
//!
//! Driven adapter implementing `AuthenticatorRegistry` for hosts that do not
//! bring their own registry, and for tests that need a fresh one per case.
//!
//! Registration is expected during startup; afterwards the map is only read.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::config::RegistryConfig;
use crate::domain::errors::{AuthError, ConfigError};
use crate::ports::inbound::Authenticator;
use crate::ports::outbound::{AuthenticatorRegistry, RegistryError};

/// Error from dispatching a call through the registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Lookup failed
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The selected authenticator rejected the input
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Registry keyed by scheme identifier.
pub struct InMemoryAuthenticatorRegistry {
    config: RegistryConfig,
    schemes: RwLock<HashMap<String, Arc<dyn Authenticator>>>,
}

impl InMemoryAuthenticatorRegistry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
            schemes: RwLock::new(HashMap::new()),
        }
    }

    /// Create an empty registry with a validated configuration.
    pub fn with_config(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            schemes: RwLock::new(HashMap::new()),
        })
    }

    /// Registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Look up the authenticator registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Authenticator>> {
        self.read().get(name).cloned()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Registered scheme identifiers, sorted.
    pub fn schemes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered schemes.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no scheme is registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Derive an address with the authenticator selected by `scheme`.
    pub fn address(&self, scheme: &str, public_key: &[u8]) -> Result<String, DispatchError> {
        Ok(self.lookup(scheme)?.address(public_key)?)
    }

    /// Verify a signature with the authenticator selected by `scheme`.
    pub fn verify(
        &self,
        scheme: &str,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), DispatchError> {
        Ok(self.lookup(scheme)?.verify(public_key, message, signature)?)
    }

    fn lookup(&self, scheme: &str) -> Result<Arc<dyn Authenticator>, RegistryError> {
        self.get(scheme)
            .ok_or_else(|| RegistryError::UnknownScheme(scheme.to_string()))
    }

    // The map holds no invariant a panicking writer could break, so a
    // poisoned lock is still safe to read through.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<dyn Authenticator>>> {
        self.schemes.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemoryAuthenticatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryAuthenticatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAuthenticatorRegistry")
            .field("config", &self.config)
            .field("schemes", &self.schemes())
            .finish()
    }
}

impl AuthenticatorRegistry for InMemoryAuthenticatorRegistry {
    fn register(
        &self,
        name: &str,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<(), RegistryError> {
        if let Err(reason) = self.config.check_name(name) {
            warn!(scheme = %name, %reason, "Rejected authenticator name");
            return Err(RegistryError::InvalidSchemeName {
                name: name.to_string(),
                reason,
            });
        }

        let mut schemes = self.schemes.write().unwrap_or_else(|e| e.into_inner());

        if schemes.contains_key(name) {
            warn!(scheme = %name, "Authenticator already registered");
            return Err(RegistryError::DuplicateScheme(name.to_string()));
        }

        if schemes.len() >= self.config.max_schemes {
            warn!(scheme = %name, max = self.config.max_schemes, "Authenticator registry full");
            return Err(RegistryError::RegistryFull {
                max: self.config.max_schemes,
            });
        }

        schemes.insert(name.to_string(), authenticator);
        debug!(scheme = %name, total = schemes.len(), "Authenticator registered");
        info!(scheme = %name, "Registered authenticator");

        Ok(())
    }
}
