//! Gas command implementation.
//!
//! The gas command:
//! 1. Loads the old and new pool gas samples
//! 2. Averages both and computes the percentage delta
//! 3. Prints the three report lines (and writes a JSON report if configured)

use crate::aggregator::{compare, GasComparison, ReportPrecision};
use crate::loader::load_sample_pair;
use crate::output::write_gas_report;
use crate::utils::config::GasConfig;
use anyhow::{Context, Result};
use colored::*;
use log::info;
use std::time::Instant;

/// Execute the gas comparison
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The computed comparison, after its lines have been printed
///
/// # Errors
/// * Missing or malformed sample files
/// * Empty sample sets or a zero baseline average
/// * Report write errors
pub fn execute_gas(config: &GasConfig) -> Result<GasComparison> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading gas samples...");
    let (old, new) = load_sample_pair(&config.old_samples, &config.new_samples)
        .context("Failed to load gas samples")?;

    info!("Step 2/3: Comparing {} old vs {} new samples...", old.len(), new.len());
    let comparison = compare(&old, &new).with_context(|| {
        format!(
            "Failed to compare {} against {}",
            config.new_samples.display(),
            config.old_samples.display()
        )
    })?;

    info!("Step 3/3: Reporting...");
    for line in gas_report_lines(&comparison, config) {
        println!("{}", line);
    }

    if let Some(report_path) = &config.report {
        let report = comparison.to_report(
            &config.old_samples.display().to_string(),
            &config.new_samples.display().to_string(),
        );
        write_gas_report(&report, report_path).context("Failed to write gas report JSON")?;
        println!(
            "{} Gas report written to {}",
            "✓".green(),
            report_path.display().to_string().cyan()
        );
    }

    info!("Gas comparison completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(comparison)
}

/// Report lines using the configured precision
pub fn gas_report_lines(comparison: &GasComparison, config: &GasConfig) -> [String; 3] {
    comparison.report_lines(ReportPrecision {
        average_decimals: config.average_decimals,
        delta_decimals: config.delta_decimals,
    })
}
