//! Gas comparison between the old and new pool implementations.
//!
//! Averages each sample set and expresses the new average as a
//! percentage change over the old one.

use crate::loader::schema::SampleSet;
use crate::utils::config::{DEFAULT_AVERAGE_DECIMALS, DEFAULT_DELTA_DECIMALS};
use crate::utils::error::GasError;
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

/// Current gas report schema version
pub const GAS_REPORT_VERSION: &str = "1.0.0";

/// Arithmetic mean of all samples
///
/// **Public** - order of the identifiers has no effect
///
/// # Errors
/// * `GasError::DivisionByZero` - the set is empty
pub fn average(samples: &SampleSet) -> Result<f64, GasError> {
    if samples.is_empty() {
        return Err(GasError::DivisionByZero(
            "cannot average an empty sample set".to_string(),
        ));
    }

    let total: f64 = samples.values().sum();
    Ok(total / samples.len() as f64)
}

/// Percentage change of the new average over the old one
///
/// **Public** - `(avg(new) - avg(old)) / avg(old) * 100`
///
/// # Errors
/// * `GasError::DivisionByZero` - either set is empty, or the old average is 0
pub fn percent_delta(old: &SampleSet, new: &SampleSet) -> Result<f64, GasError> {
    Ok(compare(old, new)?.percent_delta)
}

/// Compute both averages and the delta in one pass
///
/// **Public** - main entry point for the gas command
pub fn compare(old: &SampleSet, new: &SampleSet) -> Result<GasComparison, GasError> {
    let old_average = average(old)?;
    let new_average = average(new)?;

    if old_average == 0.0 {
        return Err(GasError::DivisionByZero(
            "old pool average is 0, percentage delta is undefined".to_string(),
        ));
    }

    let percent_delta = (new_average - old_average) / old_average * 100.0;

    debug!(
        "Gas comparison: old={} ({} samples), new={} ({} samples), delta={}%",
        old_average,
        old.len(),
        new_average,
        new.len(),
        percent_delta
    );

    Ok(GasComparison {
        old_average,
        new_average,
        percent_delta,
        old_sample_count: old.len(),
        new_sample_count: new.len(),
    })
}

/// Decimal places used when printing a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPrecision {
    pub average_decimals: usize,
    pub delta_decimals: usize,
}

impl Default for ReportPrecision {
    fn default() -> Self {
        Self {
            average_decimals: DEFAULT_AVERAGE_DECIMALS,
            delta_decimals: DEFAULT_DELTA_DECIMALS,
        }
    }
}

/// Result of comparing two gas sample sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasComparison {
    pub old_average: f64,
    pub new_average: f64,

    /// Positive means the new pool costs more gas
    pub percent_delta: f64,

    pub old_sample_count: usize,
    pub new_sample_count: usize,
}

impl GasComparison {
    /// The three report lines: old average, new average, delta
    pub fn report_lines(&self, precision: ReportPrecision) -> [String; 3] {
        [
            format!(
                "Old pool avg gas:  {:.*}",
                precision.average_decimals, self.old_average
            ),
            format!(
                "New pool avg gas:  {:.*}",
                precision.average_decimals, self.new_average
            ),
            format!(
                "Difference in % :  {:.*} %",
                precision.delta_decimals, self.percent_delta
            ),
        ]
    }

    /// True when the new pool is cheaper on average
    pub fn is_improvement(&self) -> bool {
        self.percent_delta < 0.0
    }

    /// Wrap into a timestamped report for JSON output
    pub fn to_report(&self, old_source: &str, new_source: &str) -> GasReport {
        GasReport {
            version: GAS_REPORT_VERSION.to_string(),
            old_source: old_source.to_string(),
            new_source: new_source.to_string(),
            comparison: self.clone(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Gas report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the old pool samples came from
    pub old_source: String,

    /// Where the new pool samples came from
    pub new_source: String,

    pub comparison: GasComparison,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[(&str, f64)]) -> SampleSet {
        values.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn test_average() {
        let samples = set(&[("a", 100.0), ("b", 200.0), ("c", 600.0)]);
        assert_eq!(average(&samples).unwrap(), 300.0);
    }

    #[test]
    fn test_average_empty_is_division_by_zero() {
        let err = average(&SampleSet::new()).unwrap_err();
        assert!(matches!(err, GasError::DivisionByZero(_)));
    }

    #[test]
    fn test_percent_delta() {
        let old = set(&[("a", 100.0)]);
        let new = set(&[("a", 90.0)]);
        let delta = percent_delta(&old, &new).unwrap();
        assert!((delta - -10.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_delta_zero_baseline() {
        let old = set(&[("a", 0.0), ("b", 0.0)]);
        let new = set(&[("a", 10.0)]);
        assert!(matches!(
            percent_delta(&old, &new).unwrap_err(),
            GasError::DivisionByZero(_)
        ));
    }

    #[test]
    fn test_report_lines_default_precision() {
        let comparison = GasComparison {
            old_average: 1234.56,
            new_average: 1200.4,
            percent_delta: -2.76543,
            old_sample_count: 2,
            new_sample_count: 2,
        };

        let lines = comparison.report_lines(ReportPrecision::default());
        assert_eq!(lines[0], "Old pool avg gas:  1235");
        assert_eq!(lines[1], "New pool avg gas:  1200");
        assert_eq!(lines[2], "Difference in % :  -2.77 %");
        assert!(comparison.is_improvement());
    }

    #[test]
    fn test_report_lines_custom_precision() {
        let comparison = GasComparison {
            old_average: 10.25,
            new_average: 12.5,
            percent_delta: 21.951219,
            old_sample_count: 4,
            new_sample_count: 4,
        };

        let precision = ReportPrecision {
            average_decimals: 1,
            delta_decimals: 0,
        };
        let lines = comparison.report_lines(precision);
        assert_eq!(lines[1], "New pool avg gas:  12.5");
        assert_eq!(lines[2], "Difference in % :  22 %");
    }

    #[test]
    fn test_to_report_carries_sources() {
        let old = set(&[("a", 100.0)]);
        let new = set(&[("a", 150.0)]);
        let report = compare(&old, &new).unwrap().to_report("old.json", "new.json");

        assert_eq!(report.version, GAS_REPORT_VERSION);
        assert_eq!(report.old_source, "old.json");
        assert_eq!(report.comparison.percent_delta, 50.0);
        assert!(!report.generated_at.is_empty());
    }
}
