//! Error types for config validation.

use thiserror::Error;

/// Errors returned while validating config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A specific field failed validation.
    #[error("invalid config at {path}: {message}")]
    InvalidField {
        /// Dotted path of the offending field.
        path: String,
        /// What was wrong with the value.
        message: String,
    },
}
