//! Swap and price plot commands.
//!
//! Both follow the same pipeline:
//! 1. Load the axis document
//! 2. Load the output cube
//! 3. Build series
//! 4. Render the chart

use crate::loader::{load_cube, load_price_axes, load_swap_axes};
use crate::render::CurveRenderer;
use crate::series::{build_price_series, build_swap_series, PriceCurveSet, SwapCurveSet};
use crate::utils::config::{PricePlotConfig, SwapPlotConfig};
use anyhow::{Context, Result};
use colored::*;
use log::{debug, info};

/// Execute the swap-curve plot
///
/// **Public** - main entry point called from main.rs
pub fn execute_swap(config: &SwapPlotConfig, renderer: &impl CurveRenderer) -> Result<SwapCurveSet> {
    info!("Step 1/4: Loading swap axes...");
    let axes = load_swap_axes(&config.input).context("Failed to load swap axes")?;

    debug!(
        "Swap axes: {} factors x {} skews x {} swap points",
        axes.factors.len(),
        axes.skews.len(),
        axes.swap_pcts.len()
    );

    info!("Step 2/4: Loading swap output cube...");
    let cube = load_cube(&config.output).context("Failed to load swap output cube")?;

    info!("Step 3/4: Building swap series...");
    let set = build_swap_series(&axes, &cube, config.scale)
        .with_context(|| format!("Failed to build swap series from {}", config.output.display()))?;

    if let Some(bounds) = set.y_bounds {
        debug!("Swap Y range: {} .. {}", bounds.min, bounds.max);
    }

    info!("Step 4/4: Rendering {} series...", set.series.len());
    renderer
        .render_swap_curves(&set, &config.plot)
        .context("Failed to render swap plot")?;

    println!(
        "{} Swap plot written to {}",
        "✓".green(),
        config.plot.display().to_string().cyan()
    );

    Ok(set)
}

/// Execute the price-curve plot
///
/// **Public** - main entry point called from main.rs
pub fn execute_price(config: &PricePlotConfig, renderer: &impl CurveRenderer) -> Result<PriceCurveSet> {
    info!("Step 1/4: Loading price axes...");
    let axes = load_price_axes(&config.input).context("Failed to load price axes")?;

    info!("Step 2/4: Loading price table...");
    let table = load_cube(&config.output).context("Failed to load price table")?;

    info!("Step 3/4: Building price series...");
    let set = build_price_series(&axes, &table, config.scale)
        .with_context(|| format!("Failed to build price series from {}", config.output.display()))?;

    info!("Step 4/4: Rendering {} series...", set.series.len());
    renderer
        .render_price_curves(&set, &config.plot)
        .context("Failed to render price plot")?;

    println!(
        "{} Price plot written to {}",
        "✓".green(),
        config.plot.display().to_string().cyan()
    );

    Ok(set)
}
