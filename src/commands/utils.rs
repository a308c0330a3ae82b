use crate::commands::{execute_gas, execute_price, execute_swap};
use crate::render::PlottersRenderer;
use crate::utils::config::AnalysisConfig;
use anyhow::Result;
use log::info;

/// Run the gas report and both plots, stopping at the first failure
pub fn execute_all(config: &AnalysisConfig) -> Result<()> {
    info!("Running gas comparison");
    execute_gas(&config.gas)?;

    info!("Running swap-curve plot");
    let swap_renderer = PlottersRenderer::new(config.swap.width, config.swap.height);
    execute_swap(&config.swap, &swap_renderer)?;

    info!("Running price-curve plot");
    let price_renderer = PlottersRenderer::new(config.price.width, config.price.height);
    execute_price(&config.price, &price_renderer)?;

    Ok(())
}

/// Print the effective configuration as TOML
pub fn display_config(config: &AnalysisConfig) -> Result<()> {
    println!("# Effective configuration");
    println!("{}", config.to_toml()?);
    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("AMM Curve Report v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Gas comparison and swap/price curve plots for stableswap pool simulations.");
}
