//! Generator configuration
//!
//! Collaborators that persist or ship a generator setup describe it with a
//! `GeneratorConfig`, usually as JSON:
//!
//! ```
//! use seedkit_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_json(r#"{ "seed": 9281 }"#).unwrap();
//! assert_eq!(config.seed, 9281);
//! assert_eq!(config.discard, seedkit_core::config::DEFAULT_DISCARD);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Keystream bytes dropped after key scheduling unless configured otherwise
pub const DEFAULT_DISCARD: usize = 1024;

/// Upper bound on `discard`; anything larger is a configuration mistake
pub const MAX_DISCARD: usize = 1 << 20;

/// Errors raised while loading or validating a `GeneratorConfig`
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("discard of {discard} bytes exceeds maximum of {max}")]
    DiscardTooLarge { discard: usize, max: usize },

    #[error("invalid generator config: {0}")]
    Parse(String),
}

/// Seed plus keystream discard length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub seed: u64,

    #[serde(default = "default_discard")]
    pub discard: usize,
}

fn default_discard() -> usize {
    DEFAULT_DISCARD
}

impl GeneratorConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            discard: DEFAULT_DISCARD,
        }
    }

    /// Parse and validate a JSON config
    ///
    /// # Errors
    /// `ConfigError::Parse` for malformed JSON, or any validation error
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// `ConfigError::DiscardTooLarge` if `discard > MAX_DISCARD`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discard > MAX_DISCARD {
            return Err(ConfigError::DiscardTooLarge {
                discard: self.discard,
                max: MAX_DISCARD,
            });
        }
        Ok(())
    }
}
