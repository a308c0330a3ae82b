//! In-memory model of the simulator's output documents.
//!
//! Everything here is built once per run by the loader and only read
//! afterwards.

use crate::utils::error::SeriesError;
use std::collections::BTreeMap;

/// Keyed numeric samples (identifier -> gas units or output amount)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    samples: BTreeMap<String, f64>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sample, returning the previous value for that identifier
    pub fn insert(&mut self, id: impl Into<String>, value: f64) -> Option<f64> {
        self.samples.insert(id.into(), value)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.samples.get(id).copied()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.samples.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SampleSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A single parameter value on an axis
///
/// `key` is the exact textual form of the number in the source document.
/// The output cube is keyed by that text, so `100` and `100.0` are
/// different keys.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisValue {
    pub value: f64,
    pub key: String,
}

impl AxisValue {
    pub fn new(value: f64, key: impl Into<String>) -> Self {
        Self {
            value,
            key: key.into(),
        }
    }

    /// Skew keys are written as zero-decimal integers
    pub fn skew_key(&self) -> String {
        format!("{:.0}", self.value)
    }
}

impl From<f64> for AxisValue {
    fn from(value: f64) -> Self {
        Self {
            value,
            key: value.to_string(),
        }
    }
}

/// Ordered values along one independent axis
///
/// Order is significant: it is the plotting order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisSpec {
    /// Key of the axis in the source document
    pub name: String,
    pub values: Vec<AxisValue>,
}

impl AxisSpec {
    pub fn new(name: impl Into<String>, values: Vec<AxisValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Build an axis from plain numbers (keys use their default text form)
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(name, values.iter().copied().map(AxisValue::from).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AxisValue> {
        self.values.iter()
    }

    pub fn numbers(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.value).collect()
    }
}

/// Axes of the swap simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SwapAxes {
    pub factors: AxisSpec,
    pub skews: AxisSpec,
    pub swap_pcts: AxisSpec,
}

/// Axes of the price simulation
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAxes {
    pub factors: AxisSpec,
    pub skews: AxisSpec,
}

/// Simulated results keyed by factor, then by skew
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputCube {
    cells: BTreeMap<String, BTreeMap<String, Vec<f64>>>,
}

impl OutputCube {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        factor_key: impl Into<String>,
        skew_key: impl Into<String>,
        values: Vec<f64>,
    ) {
        self.cells
            .entry(factor_key.into())
            .or_default()
            .insert(skew_key.into(), values);
    }

    /// Look up one cell
    ///
    /// # Errors
    /// * `SeriesError::KeyNotFound` - either key is absent
    pub fn cell(&self, factor_key: &str, skew_key: &str) -> Result<&[f64], SeriesError> {
        self.cells
            .get(factor_key)
            .and_then(|by_skew| by_skew.get(skew_key))
            .map(Vec::as_slice)
            .ok_or_else(|| SeriesError::KeyNotFound {
                factor: factor_key.to_string(),
                skew: skew_key.to_string(),
            })
    }

    /// Number of factor entries
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<BTreeMap<String, BTreeMap<String, Vec<f64>>>> for OutputCube {
    fn from(cells: BTreeMap<String, BTreeMap<String, Vec<f64>>>) -> Self {
        Self { cells }
    }
}
