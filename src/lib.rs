//! AMM Curve Report
//!
//! Summaries and comparison plots for pre-computed stableswap pool
//! simulations:
//! - average gas of the old vs. new pool implementation
//! - swap output share vs. % of pool swapped, per A factor and pool share
//! - exchange price vs. A factor, per pool share
//!
//! This crate provides the core implementation for the
//! `amm-report` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! amm-report --config report.toml all
//! amm-report gas
//! ```

pub mod aggregator;
pub mod commands;
pub mod loader;
pub mod output;
pub mod render;
pub mod series;
pub mod share;
pub mod utils;
