//! Generator configuration module.
//!
//! Validation rules for the code generation options embedded in the
//! `[generator]` section of the configuration.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::generator::{GeneratorError, GeneratorOptions};

impl Validate for GeneratorOptions {
    fn validate(&self) -> ConfigResult<()> {
        self.check().map_err(|e| match e {
            GeneratorError::InvalidOption { option, reason } => ConfigError::ValueOutOfRange {
                key: format!("generator.{option}"),
                message: reason,
            },
            other => ConfigError::ValidationError(other.to_string()),
        })
    }
}
