//! Conversion of output cubes into plot-ready series.
//!
//! - Swap curves: one series per (A factor, skew), X = % of pool swapped
//! - Price curves: one series per skew, X = A factor

pub mod price_curve;
pub mod schema;
pub mod swap_curve;

// Re-export main types and functions
pub use price_curve::build_price_series;
pub use schema::{AxisBounds, CurveSeries, PriceCurveSet, SwapCurveSet};
pub use swap_curve::build_swap_series;
