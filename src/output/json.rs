//! JSON gas report writer.
//!
//! Writes GasReport structs to JSON files with proper formatting.

use super::path::prepare_output_path;
use crate::aggregator::GasReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a gas report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_gas_report(report: &GasReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing gas report to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!(
        "Gas report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a gas report back from disk
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::ReadFailed` - file missing or unreadable
/// * `OutputError::SerializationFailed` - contents are not a gas report
pub fn read_gas_report(input_path: impl AsRef<Path>) -> Result<GasReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading gas report from: {}", input_path.display());

    let file = File::open(input_path).map_err(|source| OutputError::ReadFailed {
        path: input_path.to_path_buf(),
        source,
    })?;
    let report: GasReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!("Gas report loaded: version {}", report.version);

    Ok(report)
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
