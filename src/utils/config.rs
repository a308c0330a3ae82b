//! Configuration and constants for the CLI.
//!
//! Every input and output location lives here instead of in the commands,
//! so the whole pipeline can be pointed at arbitrary fixture directories.

use super::error::ConfigError;
use crate::output::ImageFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed-point scale of raw skew values (18 decimals)
pub const DEFAULT_SKEW_SCALE: f64 = 1e18;

/// Decimal places for absolute gas averages
pub const DEFAULT_AVERAGE_DECIMALS: usize = 0;

/// Decimal places for the percentage delta
pub const DEFAULT_DELTA_DECIMALS: usize = 2;

/// Fraction of the span added to both ends of a padded axis range
pub const AXIS_PADDING: f64 = 0.05;

pub const DEFAULT_OLD_POOL_SAMPLES: &str = "../snapshots/SimulateSwapOldPool.json";
pub const DEFAULT_NEW_POOL_SAMPLES: &str = "../snapshots/SimulateSwapNewPool.json";
pub const DEFAULT_SWAP_INPUT: &str = "../test/json/SimulateSwapNewPool_Input.json";
pub const DEFAULT_SWAP_OUTPUT: &str = "../test/json/SimulateSwapNewPool_Output.json";
pub const DEFAULT_SWAP_PLOT: &str = "./png/SwapComparisonNewPool.png";
pub const DEFAULT_PRICE_INPUT: &str = "../test/json/GetPrice_Input.json";
pub const DEFAULT_PRICE_OUTPUT: &str = "../test/json/GetPrice_Output.json";
pub const DEFAULT_PRICE_PLOT: &str = "./png/GetPrice.png";

/// Complete analysis configuration
///
/// Missing sections and fields fall back to their defaults, so an empty
/// TOML file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Gas comparison inputs and report formatting
    pub gas: GasConfig,

    /// Swap-curve plot
    pub swap: SwapPlotConfig,

    /// Price-curve plot
    pub price: PricePlotConfig,
}

/// Gas comparison settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GasConfig {
    /// Gas samples of the old pool implementation
    pub old_samples: PathBuf,

    /// Gas samples of the new pool implementation
    pub new_samples: PathBuf,

    /// Optional JSON report destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,

    /// Decimal places for the two averages
    pub average_decimals: usize,

    /// Decimal places for the percentage delta
    pub delta_decimals: usize,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            old_samples: PathBuf::from(DEFAULT_OLD_POOL_SAMPLES),
            new_samples: PathBuf::from(DEFAULT_NEW_POOL_SAMPLES),
            report: None,
            average_decimals: DEFAULT_AVERAGE_DECIMALS,
            delta_decimals: DEFAULT_DELTA_DECIMALS,
        }
    }
}

/// Swap-curve plot settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwapPlotConfig {
    /// Axis document (factors, skews, swap percentages)
    pub input: PathBuf,

    /// Output cube keyed by factor then skew
    pub output: PathBuf,

    /// Image destination (.png or .svg)
    pub plot: PathBuf,

    /// Fixed-point scale of the skew axis
    pub scale: f64,

    pub width: u32,
    pub height: u32,
}

impl Default for SwapPlotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SWAP_INPUT),
            output: PathBuf::from(DEFAULT_SWAP_OUTPUT),
            plot: PathBuf::from(DEFAULT_SWAP_PLOT),
            scale: DEFAULT_SKEW_SCALE,
            width: 2000,
            height: 1200,
        }
    }
}

/// Price-curve plot settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PricePlotConfig {
    /// Axis document (factors, skews)
    pub input: PathBuf,

    /// Price table keyed by factor then skew
    pub output: PathBuf,

    /// Image destination (.png or .svg)
    pub plot: PathBuf,

    /// Fixed-point scale of the skew axis
    pub scale: f64,

    pub width: u32,
    pub height: u32,
}

impl Default for PricePlotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_PRICE_INPUT),
            output: PathBuf::from(DEFAULT_PRICE_OUTPUT),
            plot: PathBuf::from(DEFAULT_PRICE_PLOT),
            scale: DEFAULT_SKEW_SCALE,
            width: 1600,
            height: 1000,
        }
    }
}

impl AnalysisConfig {
    /// Check values that serde cannot check for us
    ///
    /// **Public** - called by `load_config`
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (section, scale) in [("swap", self.swap.scale), ("price", self.price.scale)] {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(ConfigError::InvalidValue(format!(
                    "{}.scale must be a positive number, got {}",
                    section, scale
                )));
            }
        }

        for (section, width, height) in [
            ("swap", self.swap.width, self.swap.height),
            ("price", self.price.width, self.price.height),
        ] {
            if width == 0 || height == 0 {
                return Err(ConfigError::InvalidValue(format!(
                    "{}.width and {}.height must be greater than 0",
                    section, section
                )));
            }
        }

        for (section, plot) in [("swap", &self.swap.plot), ("price", &self.price.plot)] {
            if ImageFormat::from_path(plot).is_none() {
                return Err(ConfigError::InvalidValue(format!(
                    "{}.plot must end in .png or .svg, got {}",
                    section,
                    plot.display()
                )));
            }
        }

        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load configuration from a TOML file
///
/// **Public** - used by main.rs when `--config` is given
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::InvalidValue` - If a value is out of range
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalysisConfig, ConfigError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let config: AnalysisConfig =
        toml::from_str(&contents).map_err(|source| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            source,
        })?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.gas.average_decimals, 0);
        assert_eq!(config.gas.delta_decimals, 2);
    }

    #[test]
    fn test_partial_config_overrides_fields() {
        let file = write_config(
            r#"
[gas]
old_samples = "fixtures/old.json"
delta_decimals = 4

[swap]
plot = "out/swap.svg"
"#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.gas.old_samples, PathBuf::from("fixtures/old.json"));
        assert_eq!(config.gas.new_samples, PathBuf::from(DEFAULT_NEW_POOL_SAMPLES));
        assert_eq!(config.gas.delta_decimals, 4);
        assert_eq!(config.swap.plot, PathBuf::from("out/swap.svg"));
        assert_eq!(config.swap.scale, DEFAULT_SKEW_SCALE);
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let file = write_config("[price]\nscale = 0.0\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let mut config = AnalysisConfig::default();
        config.swap.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unsupported_plot_extension() {
        let file = write_config("[swap]\nplot = \"out/swap.jpg\"\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
        assert!(err.to_string().contains("swap.plot"));

        let mut config = AnalysisConfig::default();
        config.price.plot = PathBuf::from("out/price");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let config = AnalysisConfig::default();
        let text = config.to_toml().unwrap();
        let parsed: AnalysisConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
