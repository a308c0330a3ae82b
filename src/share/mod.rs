//! Pool share labels derived from raw skew values.

pub mod strategy;

pub use strategy::{AdditiveSkew, PoolShare, ShareStrategy, SymmetricSkew};
