//! Chart rendering of built series.
//!
//! The builders never depend on a drawing library; commands hand their
//! results to a `CurveRenderer`.

pub mod chart;

use crate::series::{PriceCurveSet, SwapCurveSet};
use crate::utils::error::OutputError;
use std::path::Path;

pub use chart::PlottersRenderer;

/// Turns curve sets into image files
pub trait CurveRenderer {
    fn render_swap_curves(&self, set: &SwapCurveSet, output_path: &Path) -> Result<(), OutputError>;

    fn render_price_curves(&self, set: &PriceCurveSet, output_path: &Path) -> Result<(), OutputError>;
}
