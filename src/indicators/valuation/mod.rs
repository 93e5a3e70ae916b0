//! Valuation indicators: trailing percentile rank

pub mod percentile;

pub use percentile::*;
