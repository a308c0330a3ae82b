//! Plot-ready series produced by the builders.

use crate::utils::config::AXIS_PADDING;

/// One labelled curve
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSeries {
    /// Pool share label, e.g. "60/40"
    pub label: String,

    /// Index into `SwapCurveSet::factors` of the panel this curve belongs to
    /// (swap plot only)
    pub panel: Option<usize>,

    /// (x, y) points in axis order
    pub points: Vec<(f64, f64)>,
}

impl CurveSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, y)| *y)
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(x, _)| *x)
    }
}

/// Closed `[min, max]` range of one chart axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Min/max of the values, `None` when there are none
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |bounds, v| match bounds {
            None => Some(AxisBounds { min: v, max: v }),
            Some(b) => Some(AxisBounds {
                min: b.min.min(v),
                max: b.max.max(v),
            }),
        })
    }

    /// Global Y range over every point of every series
    pub fn from_series(series: &[CurveSeries]) -> Option<Self> {
        Self::from_values(series.iter().flat_map(|s| s.ys()))
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Axis range with 5% of the span added on both sides
    ///
    /// A flat range still gets a non-zero height.
    pub fn padded(&self) -> (f64, f64) {
        let span = self.span();
        let pad = if span > 0.0 {
            span * AXIS_PADDING
        } else {
            self.max.abs().max(1.0) * AXIS_PADDING
        };
        (self.min - pad, self.max + pad)
    }
}

/// Result of the swap-curve builder
#[derive(Debug, Clone, PartialEq)]
pub struct SwapCurveSet {
    /// Factors in axis order, one chart panel each
    pub factors: Vec<f64>,

    /// One series per (factor, skew), factor-major
    pub series: Vec<CurveSeries>,

    /// Shared Y range for all panels
    pub y_bounds: Option<AxisBounds>,
}

impl SwapCurveSet {
    /// Series of the panel at `index` in `factors`
    ///
    /// Panels are matched by position, so two axis entries with the same
    /// numeric value still get separate panels.
    pub fn panel(&self, index: usize) -> impl Iterator<Item = &CurveSeries> + '_ {
        self.series
            .iter()
            .filter(move |s| s.panel == Some(index))
    }
}

/// Result of the price-curve builder
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCurveSet {
    /// One series per skew, X = factor
    pub series: Vec<CurveSeries>,

    pub y_bounds: Option<AxisBounds>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(ys: &[f64]) -> CurveSeries {
        CurveSeries {
            label: "50/50".to_string(),
            panel: None,
            points: ys.iter().enumerate().map(|(i, y)| (i as f64, *y)).collect(),
        }
    }

    #[test]
    fn test_bounds_across_series() {
        let all = vec![series(&[3.0, 1.0]), series(&[7.0, 2.0])];
        let bounds = AxisBounds::from_series(&all).unwrap();
        assert_eq!(bounds, AxisBounds { min: 1.0, max: 7.0 });
    }

    #[test]
    fn test_bounds_empty() {
        assert!(AxisBounds::from_series(&[]).is_none());
        assert!(AxisBounds::from_series(&[series(&[])]).is_none());
        assert!(AxisBounds::from_values(Vec::new()).is_none());
    }

    #[test]
    fn test_padded_range() {
        let bounds = AxisBounds { min: 0.0, max: 100.0 };
        assert_eq!(bounds.padded(), (-5.0, 105.0));

        let flat = AxisBounds { min: 2.0, max: 2.0 };
        let (lo, hi) = flat.padded();
        assert!(lo < 2.0 && hi > 2.0);
    }

    #[test]
    fn test_panel_matches_by_index() {
        let curve = |panel| CurveSeries {
            panel: Some(panel),
            ..series(&[1.0])
        };
        let set = SwapCurveSet {
            factors: vec![100.0, 100.0],
            series: vec![curve(0), curve(0), curve(1)],
            y_bounds: None,
        };
        assert_eq!(set.panel(0).count(), 2);
        assert_eq!(set.panel(1).count(), 1);
        assert_eq!(set.panel(2).count(), 0);
    }
}
