//! Stateless indicators over a cleaned, chronologically ascending series.

pub mod error;

pub mod momentum;
pub mod valuation;
pub mod volatility;

pub use error::IndicatorError;
pub use momentum::*;
pub use valuation::*;
pub use volatility::*;
