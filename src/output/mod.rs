//! Output writers for reports and plots.
//!
//! This module handles writing data to disk:
//! - JSON gas reports
//! - Output path validation and image format selection

pub mod json;
pub mod path;

// Re-export main functions
pub use json::{read_gas_report, write_gas_report};
pub use path::{prepare_output_path, ImageFormat};
