//! Error types for the formforge configuration system

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested configuration file does not exist
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration file extension is not TOML, YAML or JSON
    #[error("Unsupported configuration file format: {format}")]
    UnsupportedFormat { format: String },

    /// Configuration parsing or extraction failed
    #[error("Failed to parse configuration: {source}")]
    ParseError { source: Box<figment::Error> },

    /// A value parsed but is out of range
    #[error("Invalid configuration value for key '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Current directory could not be determined
    #[error("Unable to determine current directory")]
    CurrentDirectoryNotFound,
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError {
            source: Box::new(error),
        }
    }
}

impl ConfigError {
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
