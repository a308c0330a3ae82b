//! Swap-curve series: output share vs. % of pool swapped.
//!
//! One curve per (A factor, skew) pair, X = swap percentage axis.

use super::schema::{AxisBounds, CurveSeries, SwapCurveSet};
use crate::loader::schema::{OutputCube, SwapAxes};
use crate::share::{AdditiveSkew, ShareStrategy};
use crate::utils::error::SeriesError;
use log::debug;

/// Build swap-curve series from the axes and the output cube
///
/// **Public** - main entry point for the swap plot
///
/// # Arguments
/// * `axes` - factors, skews and swap percentages in plotting order
/// * `cube` - simulated output keyed by factor then skew
/// * `scale` - fixed-point scale of the skew values
///
/// # Errors
/// * `SeriesError::KeyNotFound` - a (factor, skew) pair has no cube entry
/// * `SeriesError::MalformedInput` - a cell is not aligned with the swap axis
/// * `SeriesError::Share` - a skew value cannot be turned into a label
pub fn build_swap_series(
    axes: &SwapAxes,
    cube: &OutputCube,
    scale: f64,
) -> Result<SwapCurveSet, SeriesError> {
    let strategy = AdditiveSkew;
    let xs = axes.swap_pcts.numbers();
    let mut series = Vec::with_capacity(axes.factors.len() * axes.skews.len());

    for (panel, factor) in axes.factors.iter().enumerate() {
        for skew in axes.skews.iter() {
            let skew_key = skew.skew_key();
            let cell = cube.cell(&factor.key, &skew_key)?;

            if cell.len() != xs.len() {
                return Err(SeriesError::MalformedInput(format!(
                    "cell [{}][{}] has {} values, swap axis has {}",
                    factor.key,
                    skew_key,
                    cell.len(),
                    xs.len()
                )));
            }

            let label = strategy.to_share_label(skew.value, scale)?;
            debug!("Series A={} skew={} -> {}", factor.key, skew_key, label);

            series.push(CurveSeries {
                label,
                panel: Some(panel),
                points: xs.iter().copied().zip(cell.iter().copied()).collect(),
            });
        }
    }

    let y_bounds = AxisBounds::from_series(&series);

    Ok(SwapCurveSet {
        factors: axes.factors.numbers(),
        series,
        y_bounds,
    })
}
