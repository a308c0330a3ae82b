//! Line charts drawn with plotters.
//!
//! The swap plot is a two-column grid with one panel per A factor, all
//! panels sharing the same Y range. The price plot is a single chart with
//! one line per pool share.
//!
//! Text (titles, tick labels, axis names, legends) needs a font backend.
//! Without the `ttf` feature plotters has none and panics on the first
//! glyph, so those builds draw lines, grids and axes only.

use super::CurveRenderer;
use crate::output::{prepare_output_path, ImageFormat};
use crate::series::{AxisBounds, CurveSeries, PriceCurveSet, SwapCurveSet};
use crate::utils::error::OutputError;
use log::{debug, info};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::Path;

const SWAP_CAPTION: &str = "Comparison of % Obtained vs % of Pool Swapped for Different A Factors";
const PRICE_CAPTION: &str = "Price OETH/ETH";
const FONT: &str = "sans-serif";

/// Whether a font backend is compiled in
const DRAW_TEXT: bool = cfg!(feature = "ttf");

/// Renders curve sets to PNG or SVG files with plotters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlottersRenderer {
    pub width: u32,
    pub height: u32,
}

impl PlottersRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl CurveRenderer for PlottersRenderer {
    fn render_swap_curves(&self, set: &SwapCurveSet, output_path: &Path) -> Result<(), OutputError> {
        info!("Rendering swap curves to: {}", output_path.display());
        let format = ImageFormat::require(output_path)?;
        prepare_output_path(output_path)?;

        match format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(output_path, self.size()).into_drawing_area();
                draw_swap_grid(&root, set)?;
                root.present().map_err(render_err)?;
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(output_path, self.size()).into_drawing_area();
                draw_swap_grid(&root, set)?;
                root.present().map_err(render_err)?;
            }
        }

        Ok(())
    }

    fn render_price_curves(&self, set: &PriceCurveSet, output_path: &Path) -> Result<(), OutputError> {
        info!("Rendering price curves to: {}", output_path.display());
        let format = ImageFormat::require(output_path)?;
        prepare_output_path(output_path)?;

        match format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(output_path, self.size()).into_drawing_area();
                draw_price_chart(&root, set)?;
                root.present().map_err(render_err)?;
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(output_path, self.size()).into_drawing_area();
                draw_price_chart(&root, set)?;
                root.present().map_err(render_err)?;
            }
        }

        Ok(())
    }
}

fn render_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> OutputError {
    OutputError::RenderFailed(err.to_string())
}

fn draw_swap_grid<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    set: &SwapCurveSet,
) -> Result<(), OutputError> {
    root.fill(&WHITE).map_err(render_err)?;
    let area = if DRAW_TEXT {
        root.titled(SWAP_CAPTION, (FONT, 28)).map_err(render_err)?
    } else {
        root.clone()
    };

    if set.factors.is_empty() {
        debug!("No A factors to plot, writing an empty figure");
        return Ok(());
    }

    let cols = if set.factors.len() == 1 { 1 } else { 2 };
    let rows = (set.factors.len() + cols - 1) / cols;
    let panels = area.split_evenly((rows, cols));

    // Shared Y range across panels
    let (y_lo, y_hi) = set.y_bounds.map(|b| b.padded()).unwrap_or((0.0, 1.0));
    let last = set.factors.len() - 1;

    for (idx, (factor, panel)) in set.factors.iter().zip(panels.iter()).enumerate() {
        let series: Vec<&CurveSeries> = set.panel(idx).collect();
        let (x_lo, x_hi) = x_range(&series);

        let mut builder = ChartBuilder::on(panel);
        builder.margin(15);
        if DRAW_TEXT {
            builder
                .caption(format!("A factor: {}", factor), (FONT, 22))
                .x_label_area_size(45)
                .y_label_area_size(60);
        }
        let mut chart = builder
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
            .map_err(render_err)?;

        let mut mesh = chart.configure_mesh();
        if DRAW_TEXT {
            mesh.x_desc("% of pool swapped").y_desc("% obtained");
        }
        mesh.draw().map_err(render_err)?;

        for (i, curve) in series.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            chart
                .draw_series(LineSeries::new(curve.points.iter().copied(), color.stroke_width(2)))
                .map_err(render_err)?
                .label(curve.label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        // Every panel shares the same skews, one legend is enough
        if DRAW_TEXT && idx == last {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .position(SeriesLabelPosition::UpperRight)
                .draw()
                .map_err(render_err)?;
        }
    }

    Ok(())
}

fn draw_price_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    set: &PriceCurveSet,
) -> Result<(), OutputError> {
    root.fill(&WHITE).map_err(render_err)?;

    let series: Vec<&CurveSeries> = set.series.iter().collect();
    let (x_lo, x_hi) = x_range(&series);
    let (y_lo, y_hi) = set.y_bounds.map(|b| b.padded()).unwrap_or((0.0, 1.0));

    let mut builder = ChartBuilder::on(root);
    builder.margin(20);
    if DRAW_TEXT {
        builder
            .caption(PRICE_CAPTION, (FONT, 24))
            .x_label_area_size(45)
            .y_label_area_size(70);
    }
    let mut chart = builder
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(render_err)?;

    let mut mesh = chart.configure_mesh();
    if DRAW_TEXT {
        mesh.x_desc("A factor").y_desc("Price");
    }
    mesh.draw().map_err(render_err)?;

    for (i, curve) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(curve.points.iter().copied(), color.stroke_width(1)))
            .map_err(render_err)?
            .label(curve.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(1)));
    }

    if DRAW_TEXT && !series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(render_err)?;
    }

    Ok(())
}

/// X range over all points; a degenerate range is widened so plotters can map it
fn x_range(series: &[&CurveSeries]) -> (f64, f64) {
    match AxisBounds::from_values(series.iter().flat_map(|s| s.xs())) {
        Some(b) if b.span() > 0.0 => (b.min, b.max),
        Some(b) => b.padded(),
        None => (0.0, 1.0),
    }
}
