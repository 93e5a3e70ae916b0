//! Heuristic thresholds and runtime environment.
//!
//! The thresholds carry no statistical justification; they are kept exactly as
//! the product defines them.

use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_SYMBOL: &str = "AAPL";

pub const RSI_PERIOD: usize = 14;
pub const ATR_PERIOD: usize = 14;
/// About three trading years of daily bars.
pub const PERCENTILE_WINDOW: usize = 756;
/// Calendar days requested from the price provider.
pub const LOOKBACK_DAYS: u32 = 3 * 365;

pub const VALUE_PERCENTILE_THRESHOLD: f64 = 0.30;
pub const OVERSOLD_RSI: f64 = 35.0;

pub const ATR_WIDTH_MULTIPLIER: f64 = 1.8;
pub const MIN_WIDTH_PCT: f64 = 0.08;
pub const CENTER_DISCOUNT: f64 = 0.92;

/// Band offsets as multiples of the zone width, relative to the center.
pub const CONSERVATIVE_OFFSETS: (f64, f64) = (0.3, 0.8);
pub const NEUTRAL_HALF_WIDTH: f64 = 0.2;
pub const AGGRESSIVE_OFFSETS: (f64, f64) = (-0.8, -0.3);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub rsi_period: usize,
    pub atr_period: usize,
    pub percentile_window: usize,
    pub value_percentile_threshold: f64,
    pub oversold_rsi: f64,
    pub atr_width_multiplier: f64,
    pub min_width_pct: f64,
    pub center_discount: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rsi_period: RSI_PERIOD,
            atr_period: ATR_PERIOD,
            percentile_window: PERCENTILE_WINDOW,
            value_percentile_threshold: VALUE_PERCENTILE_THRESHOLD,
            oversold_rsi: OVERSOLD_RSI,
            atr_width_multiplier: ATR_WIDTH_MULTIPLIER,
            min_width_pct: MIN_WIDTH_PCT,
            center_discount: CENTER_DISCOUNT,
        }
    }
}

/// Deployment environment, read from `APP_ENV` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|v| v.trim().to_lowercase())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}
