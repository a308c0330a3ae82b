//! Gas sample loading.
//!
//! A sample document is a flat JSON object mapping an identifier to a
//! number. The simulator writes some values as decimal strings, so both
//! forms are accepted.

use super::document::{from_document, malformed, read_json_document};
use super::schema::SampleSet;
use crate::utils::error::LoadError;
use log::{debug, info};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSample {
    Number(f64),
    Text(String),
}

/// Load a single keyed sample set
///
/// **Public** - used by the gas command and tests
///
/// # Errors
/// * `LoadError::FileNotFound` / `LoadError::JsonError` - see `read_json_document`
/// * `LoadError::MalformedInput` - not a flat object of finite numbers
pub fn load_samples(path: impl AsRef<Path>) -> Result<SampleSet, LoadError> {
    let path = path.as_ref();
    let document = read_json_document(path)?;

    if !document.is_object() {
        return Err(malformed(path, "expected an object of identifier -> number"));
    }

    let raw: BTreeMap<String, RawSample> = from_document(path, document)?;

    let mut samples = SampleSet::new();
    for (id, sample) in raw {
        let value = match sample {
            RawSample::Number(n) => n,
            RawSample::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    malformed(path, format!("sample '{}' is not numeric: {:?}", id, text))
                })?,
        };
        if !value.is_finite() {
            return Err(malformed(path, format!("sample '{}' is not finite", id)));
        }
        samples.insert(id, value);
    }

    debug!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Load the old and new pool sample sets
///
/// **Public** - both files are read before any computation starts
pub fn load_sample_pair(
    old_path: impl AsRef<Path>,
    new_path: impl AsRef<Path>,
) -> Result<(SampleSet, SampleSet), LoadError> {
    let old_path = old_path.as_ref();
    let new_path = new_path.as_ref();

    info!("Loading gas samples: {} vs {}", old_path.display(), new_path.display());

    let old = load_samples(old_path)?;
    let new = load_samples(new_path)?;

    Ok((old, new))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_numbers_and_numeric_strings() {
        let file = fixture(r#"{"swap_1": 100, "swap_2": "200", "swap_3": 12.5}"#);
        let samples = load_samples(file.path()).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples.get("swap_1"), Some(100.0));
        assert_eq!(samples.get("swap_2"), Some(200.0));
        assert_eq!(samples.get("swap_3"), Some(12.5));
    }

    #[test]
    fn test_non_numeric_string_is_malformed() {
        let file = fixture(r#"{"swap_1": "lots"}"#);
        let err = load_samples(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput { .. }));
        assert!(err.to_string().contains("swap_1"));
    }

    #[test]
    fn test_array_document_is_malformed() {
        let file = fixture("[1, 2, 3]");
        let err = load_samples(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput { .. }));
    }

    #[test]
    fn test_nested_value_is_malformed() {
        let file = fixture(r#"{"swap_1": {"gas": 1}}"#);
        assert!(matches!(
            load_samples(file.path()).unwrap_err(),
            LoadError::MalformedInput { .. }
        ));
    }

    #[test]
    fn test_empty_object_loads_empty_set() {
        let file = fixture("{}");
        assert!(load_samples(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_non_finite_strings_are_malformed() {
        for text in ["NaN", "inf", "-infinity"] {
            let file = fixture(&format!(r#"{{"a": "{}", "b": 100}}"#, text));
            let err = load_samples(file.path()).unwrap_err();
            assert!(matches!(err, LoadError::MalformedInput { .. }), "{}", text);
            assert!(err.to_string().contains("'a'"), "{}", text);
        }
    }
}
