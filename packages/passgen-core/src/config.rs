//! # Config
//!
//! ## Environment Variables
//!
//! * `PASSGEN_DEFAULT_LENGTH` - Password length used when the request does not specify one (Default: 12)
//! * `PASSGEN_MAX_LENGTH` - Largest password length a request may ask for (Default: 4096)

use std::num::ParseIntError;
use thiserror::Error;

/// Length used when a request does not provide one
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// Largest length a request can ask for by default
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 4096;

/// Configuration for handling password requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Length used when the request has no length
    pub default_length: usize,
    /// Maximum allowed length
    pub max_length: usize,
}

/// Errors that could occur when loading the configuration
#[derive(Debug, Error)]
pub enum PasswordConfigError {
    #[error("PASSGEN_DEFAULT_LENGTH must be a number: {0}")]
    InvalidDefaultLength(ParseIntError),

    #[error("PASSGEN_MAX_LENGTH must be a number: {0}")]
    InvalidMaxLength(ParseIntError),

    #[error("PASSGEN_DEFAULT_LENGTH ({default}) must not exceed PASSGEN_MAX_LENGTH ({max})")]
    DefaultExceedsMax { default: usize, max: usize },
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_PASSWORD_LENGTH,
            max_length: DEFAULT_MAX_PASSWORD_LENGTH,
        }
    }
}

impl PasswordConfig {
    /// Load the config from environment variables
    pub fn from_env() -> Result<Self, PasswordConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the config using `lookup` to resolve variable values
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PasswordConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PasswordConfig::default();

        if let Some(default_length) = lookup("PASSGEN_DEFAULT_LENGTH") {
            config.default_length = default_length
                .trim()
                .parse::<usize>()
                .map_err(PasswordConfigError::InvalidDefaultLength)?;
        }

        if let Some(max_length) = lookup("PASSGEN_MAX_LENGTH") {
            config.max_length = max_length
                .trim()
                .parse::<usize>()
                .map_err(PasswordConfigError::InvalidMaxLength)?;
        }

        if config.default_length > config.max_length {
            return Err(PasswordConfigError::DefaultExceedsMax {
                default: config.default_length,
                max: config.max_length,
            });
        }

        Ok(config)
    }
}
