//! Skew -> pool share conversion strategies.
//!
//! The swap and price simulations encode the pool imbalance differently,
//! so each has its own formula. Both are kept as explicit strategies.

use crate::utils::error::ShareError;

/// Percentage split between token0 and token1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolShare {
    pub token0: f64,
    pub token1: f64,
}

impl PoolShare {
    /// "X/Y" label, each side rounded on its own
    ///
    /// The two sides are not forced to add up to 100 after rounding.
    pub fn label(&self) -> String {
        format!("{:.0}/{:.0}", self.token0, self.token1)
    }
}

/// Converts a raw fixed-point skew into a pool share
pub trait ShareStrategy {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Compute the share split for `raw_skew / scale`
    fn shares(&self, raw_skew: f64, scale: f64) -> Result<PoolShare, ShareError>;

    /// Human-readable "X/Y" label
    fn to_share_label(&self, raw_skew: f64, scale: f64) -> Result<String, ShareError> {
        Ok(self.shares(raw_skew, scale)?.label())
    }
}

/// Skew is the token1 amount added on top of one unit of token0
///
/// `r = v/S`, `token1 = r / (r + 1)`, `token0 = 100 - token1`
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveSkew;

impl ShareStrategy for AdditiveSkew {
    fn name(&self) -> &'static str {
        "additive"
    }

    fn shares(&self, raw_skew: f64, scale: f64) -> Result<PoolShare, ShareError> {
        let ratio = skew_ratio(raw_skew, scale)?;
        let token1 = ratio / (ratio + 1.0) * 100.0;

        Ok(PoolShare {
            token0: 100.0 - token1,
            token1,
        })
    }
}

/// Skew weights token1 against a unit token0 weight
///
/// `w0 = 1`, `w1 = 1 + v/S`, `share_i = w_i / (w0 + w1)`
#[derive(Debug, Clone, Copy, Default)]
pub struct SymmetricSkew;

impl ShareStrategy for SymmetricSkew {
    fn name(&self) -> &'static str {
        "symmetric"
    }

    fn shares(&self, raw_skew: f64, scale: f64) -> Result<PoolShare, ShareError> {
        let weight0 = 1.0;
        let weight1 = 1.0 + skew_ratio(raw_skew, scale)?;
        let total = weight0 + weight1;

        Ok(PoolShare {
            token0: weight0 * 100.0 / total,
            token1: weight1 * 100.0 / total,
        })
    }
}

/// Validate inputs and return `raw_skew / scale`
fn skew_ratio(raw_skew: f64, scale: f64) -> Result<f64, ShareError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(ShareError::InvalidParameter(format!(
            "scale must be positive, got {}",
            scale
        )));
    }

    if !(raw_skew.is_finite() && raw_skew >= 0.0) {
        return Err(ShareError::InvalidParameter(format!(
            "skew must be non-negative, got {}",
            raw_skew
        )));
    }

    Ok(raw_skew / scale)
}
