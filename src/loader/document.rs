//! Reading JSON documents from disk.
//!
//! A document is read fully and the file closed before any parsing
//! happens. Syntax errors become `JsonError`; documents that parse but do
//! not have the expected shape become `MalformedInput` in the typed loaders.

use crate::utils::error::LoadError;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole file and parse it as JSON
///
/// **Public** - shared entry point of every loader
///
/// # Errors
/// * `LoadError::FileNotFound` - path does not exist
/// * `LoadError::ReadFailed` - any other I/O error
/// * `LoadError::JsonError` - content is not valid JSON
pub fn read_json_document(path: &Path) -> Result<Value, LoadError> {
    debug!("Reading JSON document: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::ReadFailed {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let document = serde_json::from_str(&contents).map_err(|source| LoadError::JsonError {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} ({} bytes)", path.display(), contents.len());

    Ok(document)
}

/// Convert a parsed document into a typed shape
///
/// **Private to the loader** - maps shape errors to `MalformedInput`
pub(crate) fn from_document<T: DeserializeOwned>(path: &Path, document: Value) -> Result<T, LoadError> {
    serde_json::from_value(document).map_err(|e| malformed(path, e.to_string()))
}

pub(crate) fn malformed(path: &Path, reason: impl Into<String>) -> LoadError {
    LoadError::MalformedInput {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
