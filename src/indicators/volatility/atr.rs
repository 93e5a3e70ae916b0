//! ATR (Average True Range) indicator

use crate::common::math;
use crate::config::ATR_PERIOD;
use crate::indicators::error::IndicatorError;
use crate::models::bars::PriceBar;
use crate::models::indicators::AtrIndicator;

/// Calculate ATR as the simple mean of the trailing `period` true ranges.
///
/// The first bar has no previous close, so its true range is high - low.
/// With fewer than `period` bars the mean covers every bar available.
pub fn calculate_atr(bars: &[PriceBar], period: usize) -> Result<AtrIndicator, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::EmptyInput { indicator: "ATR" });
    }
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { indicator: "ATR" });
    }

    let tr_values: Vec<f64> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let prev_close = i.checked_sub(1).map(|p| bars[p].close);
            math::true_range(bar.effective_high(), bar.effective_low(), prev_close)
        })
        .collect();

    let value = math::trailing_mean(&tr_values, period)
        .ok_or(IndicatorError::EmptyInput { indicator: "ATR" })?;

    Ok(AtrIndicator {
        value,
        period,
        bars_used: tr_values.len().min(period),
    })
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(bars: &[PriceBar]) -> Result<AtrIndicator, IndicatorError> {
    calculate_atr(bars, ATR_PERIOD)
}
