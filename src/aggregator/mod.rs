//! Aggregation of gas samples into comparison metrics.
//!
//! This module turns two keyed sample sets into:
//! - Per-pool average gas
//! - Percentage delta of the new pool over the old one
//! - Printable report lines and a JSON-ready report

pub mod gas;

// Re-export main types and functions
pub use gas::{average, compare, percent_delta, GasComparison, GasReport, ReportPrecision};
