//! Price-curve series: exchange price vs. A factor.

use super::schema::{AxisBounds, CurveSeries, PriceCurveSet};
use crate::loader::schema::{OutputCube, PriceAxes};
use crate::share::{ShareStrategy, SymmetricSkew};
use crate::utils::error::SeriesError;
use log::debug;

/// Build one price series per skew, X = factor
///
/// **Public** - main entry point for the price plot
///
/// Only the first value of each cell is used; longer cells are truncated.
///
/// # Errors
/// * `SeriesError::KeyNotFound` - a (factor, skew) pair has no table entry
/// * `SeriesError::MalformedInput` - a cell is empty
/// * `SeriesError::Share` - a skew value cannot be turned into a label
pub fn build_price_series(
    axes: &PriceAxes,
    table: &OutputCube,
    scale: f64,
) -> Result<PriceCurveSet, SeriesError> {
    let strategy = SymmetricSkew;
    let mut series = Vec::with_capacity(axes.skews.len());

    for skew in axes.skews.iter() {
        let skew_key = skew.skew_key();
        let label = strategy.to_share_label(skew.value, scale)?;

        let mut points = Vec::with_capacity(axes.factors.len());
        for factor in axes.factors.iter() {
            let cell = table.cell(&factor.key, &skew_key)?;
            let price = cell.first().copied().ok_or_else(|| {
                SeriesError::MalformedInput(format!(
                    "cell [{}][{}] is empty",
                    factor.key, skew_key
                ))
            })?;
            points.push((factor.value, price));
        }

        debug!("Price series skew={} -> {} ({} points)", skew_key, label, points.len());
        series.push(CurveSeries {
            label,
            panel: None,
            points,
        });
    }

    let y_bounds = AxisBounds::from_series(&series);
    Ok(PriceCurveSet { series, y_bounds })
}
