//! AMM Curve Report CLI
//!
//! Gas comparison summaries and swap/price curve plots for
//! stableswap pool simulation results.

use amm_curve_report::commands::{
    display_config, display_version, execute_all, execute_gas, execute_price, execute_swap,
};
use amm_curve_report::render::PlottersRenderer;
use amm_curve_report::utils::config::{load_config, AnalysisConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

/// AMM Curve Report - gas and curve analysis for pool simulations
#[derive(Parser, Debug)]
#[command(name = "amm-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// TOML file with input/output paths and report settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare average gas of the old and new pool
    Gas,

    /// Plot % obtained vs % of pool swapped per A factor
    Swap,

    /// Plot price vs A factor per pool share
    Price,

    /// Run the gas comparison and both plots
    All,

    /// Print the effective configuration
    Config,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = resolve_config(cli.config.as_ref())?;

    // Execute command
    match cli.command {
        Commands::Gas => {
            execute_gas(&config.gas)?;
        }

        Commands::Swap => {
            let renderer = PlottersRenderer::new(config.swap.width, config.swap.height);
            execute_swap(&config.swap, &renderer)?;
        }

        Commands::Price => {
            let renderer = PlottersRenderer::new(config.price.width, config.price.height);
            execute_price(&config.price, &renderer)?;
        }

        Commands::All => {
            execute_all(&config)?;
        }

        Commands::Config => {
            display_config(&config)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Load the config file if one was given, defaults otherwise
///
/// **Private** - internal helper for main
fn resolve_config(path: Option<&PathBuf>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => {
            debug!("Loading config: {}", path.display());
            load_config(path).with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => {
            debug!("No config file given, using default paths");
            Ok(AnalysisConfig::default())
        }
    }
}
