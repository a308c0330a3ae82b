//! Input loading and data model.
//!
//! This module handles:
//! - Reading JSON documents from configured paths
//! - Gas sample sets (identifier -> number)
//! - Ordered axis documents and nested output cubes

pub mod axes;
pub mod document;
pub mod samples;
pub mod schema;

// Re-export main types and functions
pub use axes::{load_cube, load_price_axes, load_swap_axes};
pub use document::read_json_document;
pub use samples::{load_sample_pair, load_samples};
pub use schema::{AxisSpec, AxisValue, OutputCube, PriceAxes, SampleSet, SwapAxes};
