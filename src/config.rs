//! Credential manager configuration.
//!
//! The secret key is deliberately absent: it is supplied to
//! [`CredentialManager::with_config`](crate::CredentialManager::with_config)
//! by whatever owns key storage. This module only covers tuning knobs.
//!
//! With the `config-file` feature, configs load from TOML:
//!
//! ```toml
//! pool_capacity = 128
//! ```

use crate::security::pool::DEFAULT_POOL_CAPACITY;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading or validating a [`ManagerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field holds an unusable value.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// The TOML document could not be parsed.
    #[cfg(feature = "config-file")]
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config file could not be read.
    #[cfg(feature = "config-file")]
    #[error("config read error ({path}): {source}")]
    Io {
        /// Path that failed.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Tuning for a [`CredentialManager`](crate::CredentialManager).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManagerConfig {
    /// Maximum number of idle keyed MAC contexts kept for reuse.
    pub pool_capacity: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            pool_capacity: DEFAULT_POOL_CAPACITY,
        }
    }
}

impl ManagerConfig {
    /// Sets the pool capacity.
    #[must_use]
    pub const fn with_pool_capacity(mut self, pool_capacity: usize) -> Self {
        self.pool_capacity = pool_capacity;
        self
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `pool_capacity` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_capacity == 0 {
            return Err(ConfigError::Invalid(
                "pool_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed TOML or unknown keys, and
    /// [`ConfigError::Invalid`] if validation fails.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    #[cfg(feature = "config-file")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
