//! Axis documents and output cubes.
//!
//! Axis documents are JSON objects whose keys are the independent axes in
//! document order. Only position matters, not the key names:
//! - swap input: factors, skews, swap percentages
//! - price input: factors, skews
//!
//! Each axis value also keeps the key it is stored under in the output
//! cube. The simulator writes those keys with Python's `str()`, so float
//! values are re-spelled in that form (`1e+16`, `1e-05`, `100.0`) and
//! integers keep their digits.

use super::document::{from_document, malformed, read_json_document};
use super::schema::{AxisSpec, AxisValue, OutputCube, PriceAxes, SwapAxes};
use crate::utils::error::LoadError;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Load the three axes of the swap simulation
///
/// **Public** - used by the swap command
///
/// # Errors
/// * `LoadError::MalformedInput` - not exactly three numeric axes
pub fn load_swap_axes(path: impl AsRef<Path>) -> Result<SwapAxes, LoadError> {
    let path = path.as_ref();
    let document = read_json_document(path)?;
    let mut axes = parse_axes(path, &document, 3)?.into_iter();

    match (axes.next(), axes.next(), axes.next()) {
        (Some(factors), Some(skews), Some(swap_pcts)) => Ok(SwapAxes {
            factors,
            skews,
            swap_pcts,
        }),
        _ => Err(malformed(path, "expected 3 axes")),
    }
}

/// Load the two axes of the price simulation
///
/// **Public** - used by the price command
///
/// # Errors
/// * `LoadError::MalformedInput` - not exactly two numeric axes
pub fn load_price_axes(path: impl AsRef<Path>) -> Result<PriceAxes, LoadError> {
    let path = path.as_ref();
    let document = read_json_document(path)?;
    let mut axes = parse_axes(path, &document, 2)?.into_iter();

    match (axes.next(), axes.next()) {
        (Some(factors), Some(skews)) => Ok(PriceAxes { factors, skews }),
        _ => Err(malformed(path, "expected 2 axes")),
    }
}

/// Split an axis document into ordered axes
///
/// **Private** - relies on serde_json's `preserve_order` for key order
fn parse_axes(path: &Path, document: &Value, expected: usize) -> Result<Vec<AxisSpec>, LoadError> {
    let object = document
        .as_object()
        .ok_or_else(|| malformed(path, "axis document must be a JSON object"))?;

    if object.len() != expected {
        return Err(malformed(
            path,
            format!("expected {} axes, found {}", expected, object.len()),
        ));
    }

    let mut axes = Vec::with_capacity(expected);
    for (name, raw) in object {
        let items = raw
            .as_array()
            .ok_or_else(|| malformed(path, format!("axis '{}' must be an array", name)))?;

        let mut values = Vec::with_capacity(items.len());
        for item in items {
            let value = item
                .as_f64()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    malformed(path, format!("axis '{}' holds a non-numeric value: {}", name, item))
                })?;
            values.push(AxisValue::new(value, cube_key(item)));
        }

        debug!("Axis '{}': {} values", name, values.len());
        axes.push(AxisSpec::new(name.clone(), values));
    }

    Ok(axes)
}

/// Cube key of an axis number: integer digits, or a float spelled the way
/// Python's `repr` spells it
fn cube_key(item: &Value) -> String {
    match item {
        Value::Number(n) if n.is_f64() => python_float_repr(&n.to_string()),
        _ => item.to_string(),
    }
}

/// Re-spell a shortest round-trip float as Python's `repr`
///
/// Only the layout changes, the digits are kept: positional notation for
/// decimal exponents in `-4..16`, otherwise `d.ddde±XX` with at least two
/// exponent digits.
fn python_float_repr(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (mantissa, exponent) = match unsigned.split_once(|c: char| c == 'e' || c == 'E') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all_digits = format!("{}{}", int_part, frac_part);
    let leading_zeros = all_digits.len() - all_digits.trim_start_matches('0').len();
    let digits = all_digits.trim_matches('0');
    if digits.is_empty() {
        return format!("{}0.0", sign);
    }

    // Position of the decimal point relative to the first significant digit
    let point = int_part.len() as i32 + exponent - leading_zeros as i32;
    let exp10 = point - 1;
    let len = digits.len() as i32;

    let body = if (-4..16).contains(&exp10) {
        if point <= 0 {
            format!("0.{}{}", "0".repeat((-point) as usize), digits)
        } else if point >= len {
            format!("{}{}.0", digits, "0".repeat((point - len) as usize))
        } else {
            let (whole, fraction) = digits.split_at(point as usize);
            format!("{}.{}", whole, fraction)
        }
    } else {
        let (first, rest) = digits.split_at(1);
        let exp_sign = if exp10 < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{:02}", first, exp_sign, exp10.abs())
        } else {
            format!("{}.{}e{}{:02}", first, rest, exp_sign, exp10.abs())
        }
    };

    format!("{}{}", sign, body)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCell {
    Many(Vec<f64>),
    One(f64),
}

/// Load an output cube (or price table)
///
/// **Public** - the same nested shape serves both plots
///
/// # Errors
/// * `LoadError::MalformedInput` - not an object of objects of number arrays
pub fn load_cube(path: impl AsRef<Path>) -> Result<OutputCube, LoadError> {
    let path = path.as_ref();
    let document = read_json_document(path)?;

    let raw: BTreeMap<String, BTreeMap<String, RawCell>> = from_document(path, document)?;

    let mut cube = OutputCube::new();
    for (factor, by_skew) in raw {
        for (skew, cell) in by_skew {
            let values = match cell {
                RawCell::Many(values) => values,
                RawCell::One(value) => vec![value],
            };
            cube.insert(factor.clone(), skew, values);
        }
    }

    debug!("Loaded cube with {} factors from {}", cube.len(), path.display());
    Ok(cube)
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
    fn test_swap_axes_follow_document_order() {
        // Keys deliberately out of alphabetical order
        let file = fixture(
            r#"{"zFactors": [100, 200.0], "mSkews": [0, 1e18], "aSwap": [10, 20, 30]}"#,
        );
        let axes = load_swap_axes(file.path()).unwrap();

        assert_eq!(axes.factors.name, "zFactors");
        assert_eq!(axes.factors.numbers(), vec![100.0, 200.0]);
        assert_eq!(axes.factors.values[0].key, "100");
        assert_eq!(axes.factors.values[1].key, "200.0");
        assert_eq!(axes.skews.numbers(), vec![0.0, 1e18]);
        assert_eq!(axes.skews.values[1].skew_key(), "1000000000000000000");
        assert_eq!(axes.swap_pcts.len(), 3);
    }

    #[test]
    fn test_swap_axes_wrong_count() {
        let file = fixture(r#"{"a": [1], "b": [2]}"#);
        let err = load_swap_axes(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedInput { .. }));
    }

    #[test]
    fn test_price_axes() {
        let file = fixture(r#"{"aFactors": [10, 50], "skews": [0]}"#);
        let axes = load_price_axes(file.path()).unwrap();
        assert_eq!(axes.factors.numbers(), vec![10.0, 50.0]);
        assert_eq!(axes.skews.numbers(), vec![0.0]);
    }

    #[test]
    fn test_non_numeric_axis_value() {
        let file = fixture(r#"{"aFactors": [10, "x"], "skews": [0]}"#);
        let err = load_price_axes(file.path()).unwrap_err();
        assert!(err.to_string().contains("aFactors"));
    }

    #[test]
    fn test_axis_not_an_array() {
        let file = fixture(r#"{"aFactors": 10, "skews": [0]}"#);
        assert!(matches!(
            load_price_axes(file.path()).unwrap_err(),
            LoadError::MalformedInput { .. }
        ));
    }

    #[test]
    fn test_load_cube_accepts_arrays_and_scalars() {
        let file = fixture(r#"{"100": {"0": [1.0, 2.0], "5": 3.5}}"#);
        let cube = load_cube(file.path()).unwrap();
        assert_eq!(cube.cell("100", "0").unwrap(), &[1.0, 2.0]);
        assert_eq!(cube.cell("100", "5").unwrap(), &[3.5]);
    }

    #[test]
    fn test_load_cube_rejects_flat_document() {
        let file = fixture(r#"{"100": [1.0, 2.0]}"#);
        assert!(matches!(
            load_cube(file.path()).unwrap_err(),
            LoadError::MalformedInput { .. }
        ));
    }

    #[test]
    fn test_float_keys_follow_python_repr() {
        assert_eq!(python_float_repr("100.0"), "100.0");
        assert_eq!(python_float_repr("12.5"), "12.5");
        assert_eq!(python_float_repr("1e16"), "1e+16");
        assert_eq!(python_float_repr("1e+16"), "1e+16");
        assert_eq!(python_float_repr("1.5e17"), "1.5e+17");
        assert_eq!(python_float_repr("1000000000000000.0"), "1000000000000000.0");
        assert_eq!(python_float_repr("0.0001"), "0.0001");
        assert_eq!(python_float_repr("0.00001"), "1e-05");
        assert_eq!(python_float_repr("1e-5"), "1e-05");
        assert_eq!(python_float_repr("2.5e-6"), "2.5e-06");
        assert_eq!(python_float_repr("-3e20"), "-3e+20");
        assert_eq!(python_float_repr("0.0"), "0.0");
    }

    #[test]
    fn test_exponent_factor_keys_match_simulator_output() {
        let file = fixture(r#"{"aFactors": [1e16, 10000000000000000, 1e-5], "skews": [0]}"#);
        let axes = load_price_axes(file.path()).unwrap();

        let keys: Vec<&str> = axes.factors.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["1e+16", "10000000000000000", "1e-05"]);
        assert_eq!(axes.factors.numbers(), vec![1e16, 1e16, 1e-5]);
    }
}
