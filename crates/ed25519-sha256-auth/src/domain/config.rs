//! Registry configuration and scheme name rules
//!
//! # Example
//!
//! ```
//! use ed25519_sha256_auth::RegistryConfig;
//!
//! let config = RegistryConfig::default()
//!     .with_max_schemes(8)
//!     .with_max_name_len(32);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Hard upper bound for `max_name_len`.
pub const NAME_LEN_LIMIT: usize = 255;

/// Authenticator registry configuration.
///
/// Scheme names are persisted in signed payload metadata, so the rules are
/// strict: non-empty, at most `max_name_len` bytes, `[a-z0-9_]` only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Maximum number of registered schemes
    pub max_schemes: usize,
    /// Maximum scheme name length in bytes
    pub max_name_len: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_schemes: 64,
            max_name_len: 64,
        }
    }
}

impl RegistryConfig {
    /// Create a new configuration with validation
    pub fn new(max_schemes: usize, max_name_len: usize) -> Result<Self, ConfigError> {
        let config = Self {
            max_schemes,
            max_name_len,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_schemes == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        if self.max_name_len == 0 || self.max_name_len > NAME_LEN_LIMIT {
            return Err(ConfigError::InvalidNameLength {
                actual: self.max_name_len,
                max: NAME_LEN_LIMIT,
            });
        }

        Ok(())
    }

    /// Builder-style method to set the scheme capacity
    pub fn with_max_schemes(mut self, max: usize) -> Self {
        self.max_schemes = max;
        self
    }

    /// Builder-style method to set the name length limit
    pub fn with_max_name_len(mut self, max: usize) -> Self {
        self.max_name_len = max;
        self
    }

    /// Check a scheme name against the naming rules.
    ///
    /// Returns the reason on rejection.
    pub fn check_name(&self, name: &str) -> Result<(), String> {
        if name.is_empty() {
            return Err("name is empty".to_string());
        }

        if name.len() > self.max_name_len {
            return Err(format!(
                "name is {} bytes, limit is {}",
                name.len(),
                self.max_name_len
            ));
        }

        if let Some(c) = name
            .chars()
            .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '_'))
        {
            return Err(format!("character {c:?} not allowed"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RegistryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(RegistryConfig::new(0, 64), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn test_name_len_bounds() {
        assert_eq!(
            RegistryConfig::new(4, 0),
            Err(ConfigError::InvalidNameLength {
                actual: 0,
                max: NAME_LEN_LIMIT
            })
        );
        assert!(RegistryConfig::new(4, NAME_LEN_LIMIT).is_ok());
        assert!(RegistryConfig::new(4, NAME_LEN_LIMIT + 1).is_err());
    }

    #[test]
    fn test_scheme_names() {
        let config = RegistryConfig::default();

        assert!(config.check_name("ed25519_nr_jc").is_ok());
        assert!(config.check_name("secp256k1").is_ok());
        assert!(config.check_name("").is_err());
        assert!(config.check_name("Ed25519").is_err());
        assert!(config.check_name("ed25519-nr").is_err());
        assert!(config.check_name(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RegistryConfig = serde_json::from_str(r#"{"max_schemes": 2}"#).unwrap();
        assert_eq!(config.max_schemes, 2);
        assert_eq!(config.max_name_len, 64);
    }
}
