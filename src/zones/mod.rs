//! Accumulation zones and add-on levels.

use crate::config::{
    AnalysisConfig, AGGRESSIVE_OFFSETS, CONSERVATIVE_OFFSETS, NEUTRAL_HALF_WIDTH,
};
use crate::models::zones::{AddOnLevels, PriceBand, PriceZones};

/// Zone width: the ATR band, floored at a fixed share of the price.
pub fn zone_width(last_price: f64, atr: f64, config: &AnalysisConfig) -> f64 {
    let atr = if atr.is_finite() { atr.max(0.0) } else { 0.0 };
    (config.atr_width_multiplier * atr).max(config.min_width_pct * last_price)
}

/// Bands around a center discounted from the last price. Conservative sits
/// closest to the price, aggressive deepest below it.
pub fn calculate_zones(last_price: f64, atr: f64, config: &AnalysisConfig) -> PriceZones {
    let width = zone_width(last_price, atr, config);
    let center = config.center_discount * last_price;
    let band = |(lo, hi): (f64, f64)| PriceBand::new(center + lo * width, center + hi * width);

    PriceZones {
        center,
        width,
        conservative: band(CONSERVATIVE_OFFSETS),
        neutral: band((-NEUTRAL_HALF_WIDTH, NEUTRAL_HALF_WIDTH)),
        aggressive: band(AGGRESSIVE_OFFSETS),
    }
}

pub fn calculate_add_ons(zones: &PriceZones) -> AddOnLevels {
    AddOnLevels {
        first_add: zones.neutral.low,
        pullback_add: zones.aggressive.midpoint(),
    }
}
