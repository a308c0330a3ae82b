//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading input documents
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed input in {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },
}

/// Errors raised by the gas aggregator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    #[error("Division by zero: {0}")]
    DivisionByZero(String),
}

/// Errors raised by the share normalizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShareError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Errors raised while building plot series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("Key not found in output cube: factor={factor}, skew={skew}")]
    KeyNotFound { factor: String, skew: String },

    #[error("Malformed output cube: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Share(#[from] ShareError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Chart rendering failed: {0}")]
    RenderFailed(String),
}

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config value: {0}")]
    InvalidValue(String),

    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[from] toml::ser::Error),
}
